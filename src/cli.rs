use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codecoach")]
#[command(
    about = "Learn from your own Python code: concepts, interview prep and a skills summary",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze Python files and produce a learning report
    Analyze {
        /// Files or directories to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format [default: terminal, or output.default_format from config]
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of next learning steps to suggest (1-10)
        #[arg(long = "max-next-steps")]
        max_next_steps: Option<usize>,

        /// Leave out the interview preparation section
        #[arg(long = "no-interview")]
        no_interview: bool,

        /// Recover imports from files with syntax errors instead of skipping them
        #[arg(long = "recover-unparseable")]
        recover_unparseable: bool,

        /// Job requirements file (keywords separated by newlines or commas)
        #[arg(long)]
        requirements: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .codecoach.toml)
        #[arg(long, env = "CODECOACH_CONFIG")]
        config: Option<PathBuf>,

        /// Disable colors
        #[arg(long)]
        plain: bool,

        /// Analyze files one at a time
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Markdown,
    Json,
    /// key: value pairs for resume tools
    Resume,
}

impl OutputFormat {
    /// Parse a format name as written in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Markdown => Self::Markdown,
            OutputFormat::Json => Self::Json,
            OutputFormat::Resume => Self::Resume,
        }
    }
}
