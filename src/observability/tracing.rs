//! Log subscriber setup.
//!
//! `CODECOACH_LOG` takes an `EnvFilter` directive (`debug`,
//! `codecoach::patterns=trace`); without it the level follows the `-v`
//! count. `log` records from library code are bridged into the same
//! subscriber. Output goes to stderr so reports on stdout stay clean.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "CODECOACH_LOG";

pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init_tracing(verbosity: u8) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .without_time()
        .try_init();

    if installed.is_err() {
        log::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(0);
        init_tracing(3);
    }
}
