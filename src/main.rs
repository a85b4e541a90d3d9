//! Trellis CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Note-graph export indexing and page classification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding the checkpoint store (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph index from an export
    Index {
        /// Path to the exported JSON records
        input: PathBuf,

        /// Checkpoint the constructed index under the root directory
        #[arg(short, long)]
        save: bool,
    },
    /// Classify pages by naming convention
    Classify {
        /// Path to the exported JSON records
        input: PathBuf,
    },
    /// Render one page tree as an outline
    Show {
        /// Path to the exported JSON records
        input: PathBuf,

        /// Page title to render
        #[arg(short, long)]
        page: Option<String>,

        /// Zero-based record position to render instead of a title
        #[arg(long)]
        position: Option<usize>,
    },
    /// Remove the checkpoint directory
    Clear,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "trellis={log_level},trellis_core={log_level},trellis_store={log_level},trellis_render={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Trellis v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Index { input, save } => commands::index(input, &cli.root, save),
        Commands::Classify { input } => commands::classify(input),
        Commands::Show {
            input,
            page,
            position,
        } => commands::show(input, page, position),
        Commands::Clear => commands::clear(&cli.root),
        Commands::Version => {
            println!("Trellis v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
