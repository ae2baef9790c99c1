//! Memory-efficient storage keyed by marker.

use super::GameBoard;
use crate::{BoardDimensions, Marker, Position, Square, render};
use std::collections::HashMap;
use tracing::{instrument, warn};

/// Board that records only occupied squares, as one placement list per
/// marker.
///
/// Placement is amortized O(1). [`whats_at_pos`](GameBoard::whats_at_pos)
/// searches every list, O(P) in the number of placed markers;
/// [`is_player_at_pos`](GameBoard::is_player_at_pos) searches a single
/// marker's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseBoard {
    dimensions: BoardDimensions,
    placements: HashMap<Marker, Vec<Position>>,
}

impl SparseBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new(dimensions: BoardDimensions) -> Self {
        Self {
            dimensions,
            placements: HashMap::new(),
        }
    }

    /// Positions held by `marker`, in placement order.
    pub fn placements_of(&self, marker: Marker) -> &[Position] {
        self.placements
            .get(&marker)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl GameBoard for SparseBoard {
    fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    fn whats_at_pos(&self, pos: Position) -> Square {
        self.placements
            .iter()
            .find(|(_, positions)| positions.contains(&pos))
            .map_or(Square::Empty, |(marker, _)| Square::Occupied(*marker))
    }

    fn place_marker(&mut self, pos: Position, marker: Marker) {
        if !self.check_space(pos) {
            warn!(%pos, %marker, "Ignoring placement on unavailable square");
            return;
        }
        self.placements.entry(marker).or_default().push(pos);
    }

    fn is_player_at_pos(&self, pos: Position, marker: Marker) -> bool {
        self.placements_of(marker).contains(&pos)
    }

    fn occupied_count(&self) -> usize {
        self.placements.values().map(Vec::len).sum()
    }
}

impl std::fmt::Display for SparseBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render::render_grid(self))
    }
}
