//! Command-line interface for trio_games.

use clap::Parser;

/// Trio Games - three casual games behind one terminal menu
#[derive(Parser, Debug)]
#[command(name = "trio_games")]
#[command(about = "Tic-tac-toe, matching pairs, and 2048 in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,
}
