use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::core::CoachConfig;

pub const CONFIG_FILE_NAME: &str = ".codecoach.toml";

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    fs::read_to_string(path)
}

/// Parse a TOML document and normalize out-of-range settings.
pub fn parse_and_validate_config(contents: &str) -> Result<CoachConfig, String> {
    let mut config = toml::from_str::<CoachConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
    config.analysis = config.analysis.normalized();
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CoachConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{e}. Using defaults.");
            None
        }
    }
}

/// Only real failures are worth a warning, not a missing file.
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search for `.codecoach.toml` from the working directory upward.
pub fn load_config() -> CoachConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CoachConfig::default()
        }
    }
}

pub fn load_config_from_dir(start: PathBuf) -> CoachConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CoachConfig::default()
        })
}

/// Load an explicitly named config file. Unlike discovery, failures are errors.
pub fn load_config_file(path: &Path) -> anyhow::Result<CoachConfig> {
    let contents = read_config_file(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_and_validate_config(&contents).map_err(anyhow::Error::msg)
}
