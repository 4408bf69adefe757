mod core;
mod loader;

pub use self::core::{
    default_ignore_patterns, default_max_depth, default_max_file_bytes, default_max_next_steps,
    AnalysisSettings, CoachConfig, IgnoreConfig, OutputConfig, MAX_NEXT_STEPS_LIMIT,
};
pub use self::loader::{
    directory_ancestors, load_config, load_config_file, load_config_from_dir,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Written by `codecoach init`; parses to the built-in defaults.
pub const DEFAULT_CONFIG_TOML: &str = r#"# codecoach configuration

[analysis]
# Number of next learning steps to suggest (1-10)
max_next_steps = 5
include_interview_questions = true
# When false, files with syntax errors still contribute their imports
skip_unparseable = true
max_depth = 256
max_file_bytes = 1048576
parallel = true

[ignore]
patterns = [
    "**/__pycache__/**",
    "**/.venv/**",
    "**/venv/**",
    "**/site-packages/**",
    "test_*.py",
    "*_test.py",
]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_template_matches_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, CoachConfig::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let parsed = parse_and_validate_config("").unwrap();
        assert_eq!(parsed.analysis, AnalysisSettings::default());
        assert_eq!(parsed.ignore.patterns, default_ignore_patterns());
    }

    #[test]
    fn test_partial_analysis_section() {
        let parsed = parse_and_validate_config(indoc! {"
            [analysis]
            max_next_steps = 3
            include_interview_questions = false
        "})
        .unwrap();
        assert_eq!(parsed.analysis.max_next_steps, 3);
        assert!(!parsed.analysis.include_interview_questions);
        assert!(parsed.analysis.skip_unparseable);
    }

    #[test]
    fn test_max_next_steps_is_clamped() {
        let parsed = parse_and_validate_config("[analysis]\nmax_next_steps = 50\n").unwrap();
        assert_eq!(parsed.analysis.max_next_steps, MAX_NEXT_STEPS_LIMIT);
        let parsed = parse_and_validate_config("[analysis]\nmax_next_steps = 0\n").unwrap();
        assert_eq!(parsed.analysis.max_next_steps, 1);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_and_validate_config("[analysis\n").is_err());
    }

    #[test]
    fn test_config_found_in_ancestor() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[analysis]\nmax_next_steps = 2\n",
        )
        .unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from_dir(nested);
        assert_eq!(config.analysis.max_next_steps, 2);
    }

    #[test]
    fn test_malformed_discovered_config_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        assert_eq!(
            load_config_from_dir(dir.path().to_path_buf()),
            CoachConfig::default()
        );
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_config_file(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_directory_ancestors_is_bounded() {
        let start = std::path::PathBuf::from("/a/b/c/d");
        let dirs: Vec<_> = directory_ancestors(start, 2).collect();
        assert_eq!(dirs.len(), 2);
    }
}
