//! codecoach reads a Python project and explains it back to its author:
//! which programming concepts and architectural patterns the code
//! demonstrates, how to talk about them in an interview, what to learn
//! next, and a skills summary for a resume.
//!
//! The library entry point is [`analyze`]; [`serialize`] produces the
//! byte-stable JSON form of the resulting [`LearningReport`].

pub mod aggregation;
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod knowledge;
pub mod observability;
pub mod patterns;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use crate::aggregation::ProjectProfile;
pub use crate::core::{AnalysisError, FactKind, FileError, StructuralFact};
pub use crate::io::output::{create_writer, serialize, OutputFormat, OutputWriter};
pub use crate::knowledge::{KnowledgeBase, SkillCategory};
pub use crate::patterns::{PatternRecognizer, PatternTag};
pub use crate::pipeline::{analyze, AnalysisOptions};
pub use crate::report::LearningReport;
