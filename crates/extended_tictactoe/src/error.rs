//! Error types for board configuration and move handling.

use crate::Position;
use derive_more::{Display, Error};

/// A board or game was configured outside the supported bounds.
///
/// These are the only conditions that are rejected outright. They are
/// raised before any game state exists.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Row count outside `MIN_DIMENSION..=MAX_ROWS`.
    #[display("Row count {} is outside {}..={}", rows, min, max)]
    RowsOutOfRange {
        /// Requested rows.
        rows: usize,
        /// Smallest allowed value.
        min: usize,
        /// Largest allowed value.
        max: usize,
    },

    /// Column count outside `MIN_DIMENSION..=MAX_COLUMNS`.
    #[display("Column count {} is outside {}..={}", columns, min, max)]
    ColumnsOutOfRange {
        /// Requested columns.
        columns: usize,
        /// Smallest allowed value.
        min: usize,
        /// Largest allowed value.
        max: usize,
    },

    /// Win length outside `MIN_WIN_LENGTH..=MAX_WIN_LENGTH`.
    #[display("Win length {} is outside {}..={}", win_length, min, max)]
    WinLengthOutOfRange {
        /// Requested win length.
        win_length: usize,
        /// Smallest allowed value.
        min: usize,
        /// Largest allowed value.
        max: usize,
    },

    /// Win length longer than the board is tall.
    #[display("Win length {} exceeds row count {}", win_length, rows)]
    WinLengthExceedsRows {
        /// Requested win length.
        win_length: usize,
        /// Requested rows.
        rows: usize,
    },

    /// Win length longer than the board is wide.
    #[display("Win length {} exceeds column count {}", win_length, columns)]
    WinLengthExceedsColumns {
        /// Requested win length.
        win_length: usize,
        /// Requested columns.
        columns: usize,
    },

    /// Player count outside `MIN_PLAYERS..=MAX_PLAYERS`.
    #[display("Player count {} is outside {}..={}", players, min, max)]
    PlayerCountOutOfRange {
        /// Requested players.
        players: usize,
        /// Smallest allowed value.
        min: usize,
        /// Largest allowed value.
        max: usize,
    },

    /// A marker that would be indistinguishable from an empty square.
    #[display("Marker {:?} is not a visible character", _0)]
    InvalidMarker(#[error(not(source))] char),

    /// The same marker was assigned to two players.
    #[display("Marker {:?} is assigned to more than one player", _0)]
    DuplicateMarker(#[error(not(source))] char),
}

/// A placement could not be applied.
///
/// The board itself reports availability as a boolean through
/// `check_space`; this type is for the defensive placement path and the
/// game flow layer.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The position is outside the board.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] Position),

    /// The position already holds a marker.
    #[display("Position {} is already occupied", _0)]
    SpaceOccupied(#[error(not(source))] Position),

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
