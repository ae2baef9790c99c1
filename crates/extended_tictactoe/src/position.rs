//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A (row, column) coordinate on a board.
///
/// Positions are bare coordinates: they carry no board size and are
/// never validated at construction. Range checking belongs to the board
/// a position is used against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the row index.
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    pub const fn column(self) -> usize {
        self.column
    }

    /// Returns the position one signed step away.
    ///
    /// `None` if either coordinate would become negative. The upper bound
    /// is not checked here.
    pub fn offset(self, row_step: isize, column_step: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(row_step)?,
            column: self.column.checked_add_signed(column_step)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// Input could not be read as a position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Expected a position as <row>,<column> but got {:?}", input)]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Parses `"r,c"`, `"r c"` or `"r, c"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || PositionParseError {
            input: s.to_string(),
        };

        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let row = parts.next().ok_or_else(error)?;
        let column = parts.next().ok_or_else(error)?;
        if parts.next().is_some() {
            return Err(error());
        }

        let row = row.parse::<usize>().map_err(|_| error())?;
        let column = column.parse::<usize>().map_err(|_| error())?;
        Ok(Self::new(row, column))
    }
}
