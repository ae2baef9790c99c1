//! Command-line interface for the `ttt` binary.

use clap::{Args, Parser, Subcommand};
use extended_tictactoe::{BoardKind, GameSettings};
use std::path::PathBuf;
use tracing::instrument;

/// Extended tic-tac-toe - K in a row on boards up to 100x100
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Generalized tic-tac-toe for 2 to 10 players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(BoardArgs),

    /// Validate settings and print the resolved configuration
    Check(BoardArgs),
}

/// Board and player settings. Flags override the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of rows (3-100)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns (3-100)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Markers in a row needed to win (3-25)
    #[arg(long)]
    pub win_length: Option<usize>,

    /// Number of players (2-10)
    #[arg(long)]
    pub players: Option<usize>,

    /// Explicit marker symbols, one character per player
    #[arg(long)]
    pub markers: Option<String>,

    /// Board storage: fast or memory
    #[arg(long)]
    pub board: Option<BoardKind>,
}

impl BoardArgs {
    /// Applies every flag that was given on top of `settings`.
    #[instrument(skip(settings))]
    pub fn apply(&self, mut settings: GameSettings) -> GameSettings {
        if let Some(rows) = self.rows {
            settings.rows = rows;
        }
        if let Some(columns) = self.columns {
            settings.columns = columns;
        }
        if let Some(win_length) = self.win_length {
            settings.win_length = win_length;
        }
        if let Some(players) = self.players {
            settings.players = players;
            // A count on the command line replaces markers from the file.
            settings.markers = None;
        }
        if let Some(markers) = &self.markers {
            settings.markers = Some(markers.clone());
        }
        if let Some(board) = self.board {
            settings.board = board;
        }
        settings
    }
}
