use crate::analyzers::python_ast_extraction::PythonFactExtractor;
use crate::analyzers::Analyzer;
use crate::core::{
    ast::{Ast, PythonAst},
    AnalysisError, FileError, FileFacts, Language,
};
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser};

pub struct PythonAnalyzer {
    max_depth: usize,
}

impl PythonAnalyzer {
    /// Verifies the grammar loads so per-file parses can't fail on setup.
    pub fn new(max_depth: usize) -> Result<Self, AnalysisError> {
        new_parser().map_err(AnalysisError::ParserInit)?;
        Ok(Self { max_depth })
    }
}

fn new_parser() -> Result<Parser, String> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| format!("Failed to set Python language: {e}"))?;
    Ok(parser)
}

impl Analyzer for PythonAnalyzer {
    fn parse(&self, content: &str, path: PathBuf) -> Result<Ast, FileError> {
        let mut parser = new_parser().map_err(|message| FileError::Parse {
            path: path.clone(),
            line: 0,
            column: 0,
            message,
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| FileError::Parse {
            path: path.clone(),
            line: 0,
            column: 0,
            message: "parser produced no tree".to_string(),
        })?;

        if tree.root_node().has_error() {
            return Err(syntax_error(tree.root_node(), &path));
        }

        Ok(Ast::Python(PythonAst {
            tree,
            source: content.to_string(),
            path,
        }))
    }

    fn extract(&self, ast: &Ast) -> Result<FileFacts, FileError> {
        let Ast::Python(python_ast) = ast;
        let facts = PythonFactExtractor::new(
            python_ast.source.as_bytes(),
            &python_ast.path,
            self.max_depth,
        )
        .extract(python_ast.tree.root_node())?;
        Ok(FileFacts {
            path: python_ast.path.clone(),
            facts,
            degraded: false,
        })
    }

    fn language(&self) -> Language {
        Language::Python
    }
}

/// Locate the first ERROR or MISSING node in document order.
///
/// Walks with a cursor rather than recursion so that a pathological tree
/// can't blow the stack before the depth guard gets a chance to run.
fn syntax_error(root: Node, path: &Path) -> FileError {
    let mut cursor = root.walk();
    let offender = loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            break Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        let mut advanced = false;
        while !advanced {
            if cursor.goto_next_sibling() {
                advanced = true;
            } else if !cursor.goto_parent() {
                break;
            }
        }
        if !advanced {
            break None;
        }
    };

    let node = offender.unwrap_or(root);
    let position = node.start_position();
    let message = if node.is_missing() {
        format!("missing {}", node.kind())
    } else {
        "invalid syntax".to_string()
    };

    FileError::Parse {
        path: path.to_path_buf(),
        line: position.row + 1,
        column: position.column + 1,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FactKind;
    use indoc::indoc;

    fn analyzer() -> PythonAnalyzer {
        PythonAnalyzer::new(256).unwrap()
    }

    #[test]
    fn test_parse_valid_module() {
        let ast = analyzer()
            .parse("import os\n", PathBuf::from("ok.py"))
            .unwrap();
        assert!(matches!(ast, Ast::Python(_)));
    }

    #[test]
    fn test_parse_error_reports_location() {
        let code = indoc! {"
            import os

            def broken(:
                pass
        "};
        let err = analyzer()
            .parse(code, PathBuf::from("broken.py"))
            .unwrap_err();
        match err {
            FileError::Parse { path, line, .. } => {
                assert_eq!(path, PathBuf::from("broken.py"));
                assert_eq!(line, 3);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_parses_to_no_facts() {
        let analyzer = analyzer();
        let ast = analyzer.parse("", PathBuf::from("empty.py")).unwrap();
        let facts = analyzer.extract(&ast).unwrap();
        assert!(facts.facts.is_empty());
        assert!(!facts.degraded);
    }

    #[test]
    fn test_extract_through_adapter() {
        let analyzer = analyzer();
        let ast = analyzer
            .parse("class App:\n    pass\n", PathBuf::from("app.py"))
            .unwrap();
        let facts = analyzer.extract(&ast).unwrap();
        assert_eq!(facts.of_kind(FactKind::ClassDef).count(), 1);
    }
}
