//! Crash reports and log setup.
//!
//! Install the panic hook and subscriber at startup:
//!
//! ```ignore
//! use codecoach::observability::{init_tracing, install_panic_hook};
//!
//! install_panic_hook();
//! init_tracing(verbosity);
//! ```
//!
//! Pipeline code marks where it is with RAII guards, so a crash report can
//! name the phase and the file:
//!
//! ```ignore
//! let _phase = set_phase(AnalysisPhase::Extraction);
//! let _file = set_current_file(&path);
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, get_progress, increment_processed, set_current_file, set_phase,
    set_progress, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_tracing, LOG_ENV_VAR};
