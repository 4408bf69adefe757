use std::path::PathBuf;

/// Structural tree produced by the parser adapter.
///
/// The pipeline only ever sees this wrapper, never a concrete grammar.
#[derive(Clone, Debug)]
pub enum Ast {
    Python(PythonAst),
}

#[derive(Clone, Debug)]
pub struct PythonAst {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
}
