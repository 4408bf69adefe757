use anyhow::Result;
use clap::Parser;
use codecoach::cli::{Cli, Commands};
use codecoach::commands::{self, AnalyzeConfig};
use codecoach::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            paths,
            format,
            output,
            max_next_steps,
            no_interview,
            recover_unparseable,
            requirements,
            config,
            plain,
            no_parallel,
            verbosity,
        } => {
            init_tracing(verbosity);
            if plain {
                colored::control::set_override(false);
            }
            commands::handle_analyze(AnalyzeConfig {
                paths,
                format,
                output,
                max_next_steps,
                no_interview,
                recover_unparseable,
                requirements,
                config,
                plain,
                no_parallel,
            })
        }
        Commands::Init { force } => {
            init_tracing(0);
            commands::init_config(force)
        }
    }
}
