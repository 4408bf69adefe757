//! Per-thread analysis context for crash reports.
//!
//! Each thread (including rayon workers) tracks which phase it is in and
//! which file it is reading. Progress across all threads is kept in atomic
//! counters.

use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static FILES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    pub current_file: Option<PathBuf>,
}

impl AnalysisContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
        }
    }
}

/// Pipeline stages, in the order a run passes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    FileDiscovery,
    /// Reading, parsing and extracting facts (pass 1)
    Extraction,
    Aggregation,
    /// Cross-file pattern rules (pass 2)
    PatternRecognition,
    Synthesis,
    OutputGeneration,
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileDiscovery => "file_discovery",
            Self::Extraction => "extraction",
            Self::Aggregation => "aggregation",
            Self::PatternRecognition => "pattern_recognition",
            Self::Synthesis => "synthesis",
            Self::OutputGeneration => "output_generation",
        };
        f.write_str(name)
    }
}

/// Restores the previous context when dropped, so guards nest.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = std::mem::take(&mut self.previous);
        CURRENT_CONTEXT.with(|ctx| *ctx.borrow_mut() = previous);
    }
}

fn update(change: impl FnOnce(&mut AnalysisContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        change(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_current_file(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update(|ctx| ctx.current_file = Some(path))
}

#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

pub fn set_progress(processed: usize, total: usize) {
    FILES_PROCESSED.store(processed, Ordering::Relaxed);
    FILES_TOTAL.store(total, Ordering::Relaxed);
}

pub fn increment_processed() {
    FILES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

/// (processed, total)
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        FILES_PROCESSED.load(Ordering::Relaxed),
        FILES_TOTAL.load(Ordering::Relaxed),
    )
}
