//! Error types for the analysis pipeline.
//!
//! File-level failures ([`FileError`]) are always recovered by the pipeline:
//! the file is recorded as skipped and analysis continues. Run-level failures
//! ([`AnalysisError`]) are surfaced to the caller and no report is produced.

use std::path::PathBuf;
use thiserror::Error;

/// Failure confined to a single source file.
#[derive(Debug, Error)]
pub enum FileError {
    /// Syntax could not be read
    #[error("Parse error in {}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Nesting deeper than the traversal guard allows
    #[error("Nesting in {} exceeds the traversal limit of {limit}", path.display())]
    TraversalLimitExceeded { path: PathBuf, limit: usize },

    /// File larger than the configured read bound
    #[error("{} is {size} bytes, over the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// File could not be read as UTF-8 text
    #[error("Failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileError::Parse { path, .. }
            | FileError::TraversalLimitExceeded { path, .. }
            | FileError::TooLarge { path, .. }
            | FileError::Unreadable { path, .. } => path,
        }
    }

    /// Short reason used in the "files skipped" section of a report.
    pub fn reason(&self) -> String {
        match self {
            FileError::Parse { line, column, .. } => {
                format!("syntax error at line {line}, column {column}")
            }
            FileError::TraversalLimitExceeded { limit, .. } => {
                format!("nesting deeper than {limit} levels")
            }
            FileError::TooLarge { size, .. } => format!("file too large ({size} bytes)"),
            FileError::Unreadable { source, .. } => format!("unreadable ({source})"),
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, FileError::Parse { .. })
    }
}

/// Failure of a whole analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Nothing eligible was found under the given paths
    #[error("No analyzable Python files found in {}", format_paths(searched))]
    NoAnalyzableFiles { searched: Vec<PathBuf> },

    /// The parser could not be configured for the grammar
    #[error("Failed to initialize parser: {0}")]
    ParserInit(String),

    /// A path could not be walked
    #[error("Failed to discover files under {}: {message}", path.display())]
    Discovery { path: PathBuf, message: String },
}

fn format_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(no paths)".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
