//! Panic hook printing a crash report that names the phase and file being
//! analyzed when the panic happened.

use super::context::{get_current_context, get_progress, AnalysisContext};
use std::fmt::Write as _;
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "================================================================";

/// Call once at startup, before any analysis begins.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
        let report = format_crash_report(
            &panic_message(info),
            location.as_deref(),
            &get_current_context(),
            get_progress(),
        );
        eprintln!("{report}");
        if std::env::var("RUST_BACKTRACE").is_ok() {
            eprintln!("{}", std::backtrace::Backtrace::capture());
        }
    }));
}

fn format_crash_report(
    message: &str,
    location: Option<&str>,
    context: &AnalysisContext,
    (processed, total): (usize, usize),
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "codecoach {VERSION} crashed on {}", std::env::consts::OS);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "panic: {message}");
    if let Some(location) = location {
        let _ = writeln!(out, "at: {location}");
    }

    match &context.phase {
        Some(phase) => {
            let _ = writeln!(out, "phase: {phase}");
        }
        None => {
            let _ = writeln!(out, "phase: (not started)");
        }
    }
    if let Some(file) = &context.current_file {
        let _ = writeln!(out, "file: {}", file.display());
    }
    if total > 0 {
        let _ = writeln!(out, "progress: {processed} / {total} files");
    }
    if std::env::var("RUST_BACKTRACE").is_err() {
        let _ = writeln!(out, "Run with RUST_BACKTRACE=1 for a stack trace.");
    }
    if let Some(file) = &context.current_file {
        let _ = writeln!(
            out,
            "The file above triggered the crash; include it when reporting: {}",
            file.display()
        );
    }
    out.push_str(RULE);
    out
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
