use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use census::commands::{check, graph};

#[derive(Parser)]
#[command(name = "census")]
#[command(about = "Extraction run completeness verification CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a run manifest and report a verdict per initial resource
    Check {
        /// Path to the run manifest file
        manifest: PathBuf,

        /// Emit the report as JSON instead of the colored summary
        #[arg(long)]
        json: bool,
    },

    /// Display the declared dependency graph in topological layers
    Graph {
        /// Path to the run manifest file
        manifest: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { manifest, json } => check::execute(&manifest, json),
        Commands::Graph { manifest } => graph::execute(&manifest),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
