//! Dense grid storage.

use super::GameBoard;
use crate::{BoardDimensions, Marker, Position, Square, render};
use tracing::{instrument, warn};

/// Board backed by a row-major grid of every square.
///
/// Lookup and placement are O(1); memory is O(rows x columns)
/// regardless of how many squares are occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayBoard {
    dimensions: BoardDimensions,
    squares: Vec<Square>,
    occupied: usize,
}

impl ArrayBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new(dimensions: BoardDimensions) -> Self {
        Self {
            dimensions,
            squares: vec![Square::Empty; dimensions.cell_count()],
            occupied: 0,
        }
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }
}

impl GameBoard for ArrayBoard {
    fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    fn whats_at_pos(&self, pos: Position) -> Square {
        self.dimensions
            .index_of(pos)
            .and_then(|index| self.squares.get(index).copied())
            .unwrap_or(Square::Empty)
    }

    fn place_marker(&mut self, pos: Position, marker: Marker) {
        match self
            .dimensions
            .index_of(pos)
            .and_then(|index| self.squares.get_mut(index))
        {
            Some(square) if square.is_empty() => {
                *square = Square::Occupied(marker);
                self.occupied += 1;
            }
            _ => warn!(%pos, %marker, "Ignoring placement on unavailable square"),
        }
    }

    fn occupied_count(&self) -> usize {
        self.occupied
    }
}

impl std::fmt::Display for ArrayBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render::render_grid(self))
    }
}
