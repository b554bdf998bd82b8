//! Argraph CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::ConvertOptions;

#[derive(Parser)]
#[command(name = "argraph")]
#[command(about = "Convert argument graph edges between OVA and AIF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the edges of an OVA document to AIF edges
    ToAif {
        /// OVA document (`{"edges": [...]}` or a bare edge array)
        input: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Materialize fresh nodes for every edge instead of sharing one node cache
        #[arg(long)]
        detached: bool,
    },
    /// Report edge and node counts of an OVA document
    Inspect {
        input: PathBuf,

        /// Materialize fresh nodes for every edge instead of sharing one node cache
        #[arg(long)]
        detached: bool,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "argraph={log_level},argraph_core={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::ToAif {
            input,
            output,
            pretty,
            detached,
        } => commands::to_aif(&input, output.as_deref(), &ConvertOptions { pretty, detached }),
        Commands::Inspect { input, detached } => {
            let options = ConvertOptions {
                pretty: false,
                detached,
            };
            commands::inspect(&input, &options).map(|_| ())
        }
        Commands::Version => {
            println!("argraph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
