//! Tic-Tac-Toe CLI: interactive play and position analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

use noughts::cli::commands::{analyze, play};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe with an exhaustive minimax computer opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play::PlayArgs),

    /// Analyze a position with exhaustive search
    Analyze(analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Running the binary bare starts a game
    match cli
        .command
        .unwrap_or_else(|| Commands::Play(play::PlayArgs::default()))
    {
        Commands::Play(args) => play::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
    }
}
