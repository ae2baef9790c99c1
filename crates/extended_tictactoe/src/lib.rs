//! Extended tic-tac-toe - generalized K-in-a-row board engine
//!
//! An R x C board (3 to 100 each way) shared by 2 to 10 players, where a
//! run of K (3 to 25) identical markers wins.
//!
//! # Architecture
//!
//! - **Board**: the [`GameBoard`] contract. Storage strategies supply
//!   lookup and placement; win, draw and space checks are shared.
//! - **Storage**: [`ArrayBoard`] (dense grid, O(1) lookup) and
//!   [`SparseBoard`] (per-marker placement lists, small footprint).
//! - **Rules**: win detection walks outward from the last move, so the
//!   cost scales with the run length rather than the board size.
//! - **Game**: typestate game flow owning turn order and move admission.
//!
//! # Example
//!
//! ```
//! use extended_tictactoe::{ArrayBoard, BoardDimensions, GameBoard, Marker, Position};
//!
//! # fn main() -> Result<(), extended_tictactoe::ConfigError> {
//! let mut board = ArrayBoard::new(BoardDimensions::new(3, 3, 3)?);
//! let x = Marker::new('X')?;
//!
//! for column in 0..3 {
//!     let pos = Position::new(0, column);
//!     assert!(board.check_space(pos));
//!     board.place_marker(pos, x);
//! }
//! assert!(board.check_for_winner(Position::new(0, 2)));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod game;
mod marker;
mod position;
mod render;
pub mod rules;

// Crate-level exports - Board contract and storage
pub use board::{ArrayBoard, GameBoard, SparseBoard};

// Crate-level exports - Configuration
pub use config::{
    BoardDimensions, BoardKind, GameConfig, GameSettings, MAX_COLUMNS, MAX_PLAYERS, MAX_ROWS,
    MAX_WIN_LENGTH, MIN_DIMENSION, MIN_PLAYERS, MIN_WIN_LENGTH,
};

// Crate-level exports - Errors
pub use error::{ConfigError, MoveError};

// Crate-level exports - Game flow
pub use game::{
    Contract, GameFinished, GameInProgress, GameInvariants, GameResult, GameSetup,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    LastMovePlacedInvariant, LegalMove, MonotonicBoardInvariant, Move, MoveContract,
    MoveInvariants, NextTurnInvariant, Outcome, RoundRobinTurnInvariant, SpaceInBounds,
    SpaceIsEmpty,
};

// Crate-level exports - Markers and positions
pub use marker::{DEFAULT_MARKERS, Marker, MarkerSet, Square};
pub use position::{Position, PositionParseError};

// Crate-level exports - Rendering
pub use render::render_grid;
pub use rules::Axis;
