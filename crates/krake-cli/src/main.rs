//! Krake CLI
//!
//! Command-line interface for the Krake command gateway

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "krake")]
#[command(about = "Krake - Command gateway for the orchestrator", long_about = None)]
struct Cli {
    /// Gateway configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Dispatch a single command and print its result
    Send(commands::send::SendArgs),
    /// Dispatch one command per input line
    Batch(commands::batch::BatchArgs),
    /// List namespaces, operations and keyword rules
    Catalog(commands::catalog::CatalogArgs),
}

fn main() {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = commands::setup(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Send(args) => commands::send::execute(args, config),
        Commands::Batch(args) => commands::batch::execute(args, config),
        Commands::Catalog(args) => commands::catalog::execute(args, config),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
