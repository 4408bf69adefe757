pub mod ast;
pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub use errors::{AnalysisError, FileError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[(&["py", "pyw"], Language::Python)];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Python => write!(f, "Python"),
            Language::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A source file read at discovery time. Discarded once its facts are extracted.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
    pub language: Language,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let language = Language::from_path(&path);
        Self {
            path,
            content: content.into(),
            language,
        }
    }
}

/// The syntactic shape a [`StructuralFact`] was extracted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    Import,
    ClassDef,
    FunctionDef,
    ControlConstruct,
    StringLiteral,
    Decorator,
    Call,
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FactKind::Import => "import",
            FactKind::ClassDef => "class",
            FactKind::FunctionDef => "def",
            FactKind::ControlConstruct => "construct",
            FactKind::StringLiteral => "docstring",
            FactKind::Decorator => "decorator",
            FactKind::Call => "call",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    Class,
    Function,
}

/// Innermost named scope enclosing a fact.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub name: String,
    pub kind: ScopeKind,
}

impl Scope {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ScopeKind::Class,
        }
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ScopeKind::Function,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ScopeKind::Class => write!(f, "class {}", self.name),
            ScopeKind::Function => write!(f, "{}()", self.name),
        }
    }
}

/// A single syntactic element extracted from one source file.
///
/// Field order doubles as the sort order: file, then source position, which
/// is what evidence ordering relies on.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StructuralFact {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub kind: FactKind,
    pub name: String,
    pub scope: Option<Scope>,
    /// Kind-specific extra: `target=` of a call, the decorated definition,
    /// base classes of a class, `async` for coroutines.
    pub detail: Option<String>,
}

impl StructuralFact {
    pub fn new(kind: FactKind, name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            line: 0,
            column: 0,
            kind,
            name: name.into(),
            scope: None,
            detail: None,
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    pub fn in_scope(mut self, scope: Option<Scope>) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    /// A function defined directly inside a class body.
    pub fn is_method(&self) -> bool {
        self.kind == FactKind::FunctionDef
            && self
                .scope
                .as_ref()
                .is_some_and(|s| s.kind == ScopeKind::Class)
    }

    pub fn is_in_function(&self, name: &str) -> bool {
        self.scope
            .as_ref()
            .is_some_and(|s| s.kind == ScopeKind::Function && s.name == name)
    }

    /// Last dotted segment of the name (`self.worker.start` -> `start`).
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Human-readable description used when citing evidence.
    pub fn describe(&self) -> String {
        match self.kind {
            FactKind::Import => format!("import {}", self.name),
            FactKind::ClassDef => format!("class {}", self.name),
            FactKind::FunctionDef => match &self.scope {
                Some(scope) if scope.kind == ScopeKind::Class => {
                    format!("method {}.{}", scope.name, self.name)
                }
                _ => format!("def {}", self.name),
            },
            FactKind::ControlConstruct => format!("{} construct", self.name),
            FactKind::StringLiteral => format!("docstring \"{}\"", self.name),
            FactKind::Decorator => format!("@{}", self.name),
            FactKind::Call => format!("call {}()", self.name),
        }
    }
}

/// Facts extracted from one file, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFacts {
    pub path: PathBuf,
    pub facts: Vec<StructuralFact>,
    /// Facts were recovered lexically because the file did not parse.
    pub degraded: bool,
}

impl FileFacts {
    pub fn of_kind(&self, kind: FactKind) -> impl Iterator<Item = &StructuralFact> {
        self.facts.iter().filter(move |f| f.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_path() {
        assert_eq!(Language::from_path(Path::new("app.py")), Language::Python);
        assert_eq!(Language::from_path(Path::new("main.rs")), Language::Unknown);
        assert_eq!(Language::from_path(Path::new("Makefile")), Language::Unknown);
    }

    #[test]
    fn test_method_detection() {
        let method = StructuralFact::new(FactKind::FunctionDef, "on_click", "gui.py")
            .in_scope(Some(Scope::class("App")));
        let nested = StructuralFact::new(FactKind::FunctionDef, "helper", "gui.py")
            .in_scope(Some(Scope::function("on_click")));
        let top_level = StructuralFact::new(FactKind::FunctionDef, "main", "gui.py");

        assert!(method.is_method());
        assert!(!nested.is_method());
        assert!(!top_level.is_method());
        assert_eq!(method.describe(), "method App.on_click");
    }

    #[test]
    fn test_fact_order_is_file_then_position() {
        let a = StructuralFact::new(FactKind::Import, "os", "a.py").at(3, 1);
        let b = StructuralFact::new(FactKind::Import, "json", "a.py").at(1, 1);
        let c = StructuralFact::new(FactKind::Import, "abc", "b.py").at(1, 1);
        let mut facts = vec![c.clone(), a.clone(), b.clone()];
        facts.sort();
        assert_eq!(facts, vec![b, a, c]);
    }

    #[test]
    fn test_short_name() {
        let call = StructuralFact::new(FactKind::Call, "self.frame.grid", "gui.py");
        assert_eq!(call.short_name(), "grid");
    }
}
