use crate::core::{ast::Ast, AnalysisError, FileError, FileFacts, Language, SourceFile};
use std::path::PathBuf;

pub mod fallback;
pub mod python;
pub mod python_ast_extraction;

/// Parser adapter plus fact extractor for one language.
pub trait Analyzer: Send + Sync {
    fn parse(&self, content: &str, path: PathBuf) -> Result<Ast, FileError>;
    fn extract(&self, ast: &Ast) -> Result<FileFacts, FileError>;
    fn language(&self) -> Language;
}

/// Parse one file and extract its facts. Pure: no I/O, no shared state.
pub fn analyze_file(source: &SourceFile, analyzer: &dyn Analyzer) -> Result<FileFacts, FileError> {
    analyzer
        .parse(&source.content, source.path.clone())
        .and_then(|ast| analyzer.extract(&ast))
}

pub fn get_analyzer(
    language: Language,
    max_depth: usize,
) -> Result<Box<dyn Analyzer>, AnalysisError> {
    match language {
        Language::Python => Ok(Box::new(python::PythonAnalyzer::new(max_depth)?)),
        Language::Unknown => Err(AnalysisError::ParserInit(format!(
            "no parser available for {language} sources"
        ))),
    }
}
