use crate::cli::OutputFormat;
use crate::config::{self, CoachConfig};
use crate::io::output::create_writer;
use crate::patterns::parse_requirements;
use crate::pipeline::{self, AnalysisOptions};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub max_next_steps: Option<usize>,
    pub no_interview: bool,
    pub recover_unparseable: bool,
    pub requirements: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
    pub no_parallel: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = load_file_config(config.config.as_deref())?;
    let options = build_options(&config, &file_config)?;

    let report = pipeline::analyze(&config.paths, &options).context("Analysis failed")?;
    if report.summary.files_skipped > 0 {
        log::warn!(
            "{} file(s) skipped; see the report for reasons",
            report.summary.files_skipped
        );
    }

    let format = resolve_format(config.format, &file_config);
    let use_color = !config.plain
        && config.output.is_none()
        && file_config
            .output
            .as_ref()
            .and_then(|o| o.use_color)
            .unwrap_or(true);

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    let mut writer = create_writer(format.into(), sink, use_color);
    writer.write_report(&report)?;

    if let Some(path) = &config.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}

fn load_file_config(explicit: Option<&Path>) -> Result<CoachConfig> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => Ok(config::load_config()),
    }
}

/// Config file values with command-line overrides applied on top.
pub fn build_options(config: &AnalyzeConfig, file_config: &CoachConfig) -> Result<AnalysisOptions> {
    let mut options = AnalysisOptions::from(file_config);
    if let Some(max) = config.max_next_steps {
        if !(1..=config::MAX_NEXT_STEPS_LIMIT).contains(&max) {
            anyhow::bail!(
                "--max-next-steps must be between 1 and {}, got {max}",
                config::MAX_NEXT_STEPS_LIMIT
            );
        }
        options.max_next_steps = max;
    }
    if config.no_interview {
        options.include_interview_questions = false;
    }
    if config.recover_unparseable {
        options.skip_unparseable = false;
    }
    if config.no_parallel {
        options.parallel = false;
    }
    if let Some(path) = &config.requirements {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read requirements file {}", path.display()))?;
        options.required_skills = parse_requirements(&text);
        log::debug!("{} requirement keyword(s)", options.required_skills.len());
    }
    Ok(options)
}

fn resolve_format(cli_format: Option<OutputFormat>, file_config: &CoachConfig) -> OutputFormat {
    cli_format
        .or_else(|| {
            let name = file_config.output.as_ref()?.default_format.as_deref()?;
            let parsed = OutputFormat::from_name(name);
            if parsed.is_none() {
                log::warn!("Unknown output.default_format '{name}', using terminal");
            }
            parsed
        })
        .unwrap_or(OutputFormat::Terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use tempfile::TempDir;

    fn analyze_config() -> AnalyzeConfig {
        AnalyzeConfig {
            paths: vec![PathBuf::from(".")],
            format: None,
            output: None,
            max_next_steps: None,
            no_interview: false,
            recover_unparseable: false,
            requirements: None,
            config: None,
            plain: false,
            no_parallel: false,
        }
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = AnalyzeConfig {
            max_next_steps: Some(2),
            no_interview: true,
            recover_unparseable: true,
            no_parallel: true,
            ..analyze_config()
        };
        let options = build_options(&config, &CoachConfig::default()).unwrap();
        assert_eq!(options.max_next_steps, 2);
        assert!(!options.include_interview_questions);
        assert!(!options.skip_unparseable);
        assert!(!options.parallel);
    }

    #[test]
    fn test_max_next_steps_out_of_range() {
        let config = AnalyzeConfig {
            max_next_steps: Some(0),
            ..analyze_config()
        };
        assert!(build_options(&config, &CoachConfig::default()).is_err());
    }

    #[test]
    fn test_requirements_file_is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("job.txt");
        std::fs::write(&path, "Threading\nREST, Docker\n").unwrap();
        let config = AnalyzeConfig {
            requirements: Some(path),
            ..analyze_config()
        };
        let options = build_options(&config, &CoachConfig::default()).unwrap();
        assert_eq!(options.required_skills.len(), 3);
        assert!(options.required_skills.contains("docker"));
    }

    #[test]
    fn test_missing_requirements_file_is_an_error() {
        let config = AnalyzeConfig {
            requirements: Some(PathBuf::from("/nonexistent/job.txt")),
            ..analyze_config()
        };
        assert!(build_options(&config, &CoachConfig::default()).is_err());
    }

    #[test]
    fn test_format_resolution() {
        let mut file_config = CoachConfig::default();
        assert_eq!(resolve_format(None, &file_config), OutputFormat::Terminal);

        file_config.output = Some(OutputConfig {
            default_format: Some("json".to_string()),
            use_color: None,
        });
        assert_eq!(resolve_format(None, &file_config), OutputFormat::Json);
        assert_eq!(
            resolve_format(Some(OutputFormat::Markdown), &file_config),
            OutputFormat::Markdown
        );
    }
}
