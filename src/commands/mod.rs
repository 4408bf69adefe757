//! CLI command implementations.
//!
//! - **analyze**: build a learning report from Python sources
//! - **init**: write a default `.codecoach.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
