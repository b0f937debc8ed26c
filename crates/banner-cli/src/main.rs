mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "banner", about = "Compose event banners from photos and a PNG template")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose one banner from a photo
    Compose(commands::compose::ComposeArgs),
    /// Compose banners for many photos with the same placement
    Batch(commands::batch::BatchArgs),
    /// Show how a photo would be resized and cropped
    Plan(commands::plan::PlanArgs),
    /// Print or save a default settings file
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Compose(args) => commands::compose::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
