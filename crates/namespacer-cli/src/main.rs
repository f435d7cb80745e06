mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "namespacer",
    version,
    about = "Resolve destination namespaces and stream names for replicated streams"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a configured catalog JSON file and print the result
    MapCatalog {
        /// Path to job settings YAML file
        #[arg(short, long)]
        config: PathBuf,
        /// Path to configured catalog JSON file
        catalog: PathBuf,
    },
    /// Map newline-delimited messages from stdin to stdout
    MapMessages {
        /// Path to job settings YAML file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate job settings and print the resolved policy
    Check {
        /// Path to job settings YAML file
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    match cli.command {
        Commands::MapCatalog { config, catalog } => {
            commands::map_catalog::execute(&config, &catalog).await
        }
        Commands::MapMessages { config } => commands::map_messages::execute(&config).await,
        Commands::Check { config } => commands::check::execute(&config),
    }
}
