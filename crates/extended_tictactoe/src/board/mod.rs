//! The board contract and its two storage strategies.
//!
//! [`GameBoard`] asks implementors for three primitives (dimensions,
//! lookup, placement). Everything else, including space checks,
//! win and draw detection, and rendering, is provided once as default
//! methods built on those primitives, so both storage strategies share
//! identical semantics.

mod array;
mod sparse;

pub use array::ArrayBoard;
pub use sparse::SparseBoard;

use crate::rules::{self, Axis};
use crate::{BoardDimensions, Marker, MoveError, Position, Square, render};
use tracing::{debug, instrument};

/// An R x C board on which K in a row wins.
///
/// Once a square holds a marker it is never overwritten or cleared.
/// A new game gets a new board.
pub trait GameBoard: std::fmt::Debug {
    /// Board size and win length, fixed at construction.
    fn dimensions(&self) -> BoardDimensions;

    /// Contents of `pos`.
    ///
    /// Positions off the board read as [`Square::Empty`].
    fn whats_at_pos(&self, pos: Position) -> Square;

    /// Records `marker` at `pos`.
    ///
    /// The caller must have confirmed [`check_space`](Self::check_space)
    /// first. A placement on an occupied or off-board square is ignored
    /// and leaves the board unchanged. Use
    /// [`try_place_marker`](Self::try_place_marker) to learn why a
    /// placement was refused.
    fn place_marker(&mut self, pos: Position, marker: Marker);

    /// Number of rows.
    fn num_rows(&self) -> usize {
        self.dimensions().rows()
    }

    /// Number of columns.
    fn num_columns(&self) -> usize {
        self.dimensions().columns()
    }

    /// Run length needed to win.
    fn num_to_win(&self) -> usize {
        self.dimensions().win_length()
    }

    /// True if `pos` is on the board.
    fn in_bounds(&self, pos: Position) -> bool {
        self.dimensions().contains(pos)
    }

    /// True if `pos` is on the board and empty.
    ///
    /// This is the admission check for every placement.
    fn check_space(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.whats_at_pos(pos).is_empty()
    }

    /// True if `marker` occupies `pos`.
    fn is_player_at_pos(&self, pos: Position, marker: Marker) -> bool {
        self.whats_at_pos(pos) == Square::Occupied(marker)
    }

    /// Places `marker` at `pos` only if the space is available.
    ///
    /// A rejected placement leaves the board untouched.
    fn try_place_marker(&mut self, pos: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.in_bounds(pos) {
            debug!(%pos, %marker, "Placement off the board");
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.check_space(pos) {
            debug!(%pos, %marker, "Placement on occupied square");
            return Err(MoveError::SpaceOccupied(pos));
        }
        self.place_marker(pos, marker);
        Ok(())
    }

    /// True if `marker` has a horizontal run through `last_pos` of at
    /// least the win length.
    fn check_horizontal_win(&self, last_pos: Position, marker: Marker) -> bool {
        rules::run_length(self, last_pos, marker, Axis::Horizontal) >= self.num_to_win()
    }

    /// True if `marker` has a vertical run through `last_pos` of at least
    /// the win length.
    fn check_vertical_win(&self, last_pos: Position, marker: Marker) -> bool {
        rules::run_length(self, last_pos, marker, Axis::Vertical) >= self.num_to_win()
    }

    /// True if `marker` has a run along either diagonal through
    /// `last_pos` of at least the win length.
    fn check_diagonal_win(&self, last_pos: Position, marker: Marker) -> bool {
        let win_length = self.num_to_win();
        rules::run_length(self, last_pos, marker, Axis::Diagonal) >= win_length
            || rules::run_length(self, last_pos, marker, Axis::AntiDiagonal) >= win_length
    }

    /// The first axis on which the marker at `last_pos` completes a
    /// winning run, if any.
    fn winning_axis(&self, last_pos: Position) -> Option<Axis> {
        rules::winning_axis(self, last_pos)
    }

    /// True if the marker just placed at `last_pos` won the game.
    ///
    /// Call immediately after placing at `last_pos`. Only runs through
    /// that square are examined.
    #[instrument(skip(self), fields(rows = self.num_rows(), columns = self.num_columns()))]
    fn check_for_winner(&self, last_pos: Position) -> bool {
        rules::check_winner(self, last_pos)
    }

    /// True if no square on the board is empty.
    ///
    /// A full board with a winning run is a win, so check for a winner
    /// first.
    #[instrument(skip(self))]
    fn check_for_draw(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of occupied squares.
    fn occupied_count(&self) -> usize {
        self.dimensions()
            .positions()
            .filter(|pos| !self.whats_at_pos(*pos).is_empty())
            .count()
    }

    /// Text grid of the board, for diagnostics and tests.
    fn render(&self) -> String {
        render::render_grid(self)
    }
}

impl<B: GameBoard + ?Sized> GameBoard for Box<B> {
    fn dimensions(&self) -> BoardDimensions {
        (**self).dimensions()
    }

    fn whats_at_pos(&self, pos: Position) -> Square {
        (**self).whats_at_pos(pos)
    }

    fn place_marker(&mut self, pos: Position, marker: Marker) {
        (**self).place_marker(pos, marker);
    }

    fn is_player_at_pos(&self, pos: Position, marker: Marker) -> bool {
        (**self).is_player_at_pos(pos, marker)
    }

    fn occupied_count(&self) -> usize {
        (**self).occupied_count()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Dense board that counts square lookups.
    #[derive(Debug)]
    struct CountingBoard {
        inner: ArrayBoard,
        lookups: Cell<usize>,
    }

    impl GameBoard for CountingBoard {
        fn dimensions(&self) -> BoardDimensions {
            self.inner.dimensions()
        }

        fn whats_at_pos(&self, pos: Position) -> Square {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.whats_at_pos(pos)
        }

        fn place_marker(&mut self, pos: Position, marker: Marker) {
            self.inner.place_marker(pos, marker);
        }

        fn occupied_count(&self) -> usize {
            self.inner.occupied_count()
        }
    }

    #[test]
    fn test_boxed_board_uses_backend_overrides() {
        let mut inner = ArrayBoard::new(BoardDimensions::default());
        inner.place_marker(Position::new(1, 1), Marker::new('X').unwrap());
        let board: Box<dyn GameBoard> = Box::new(CountingBoard {
            inner,
            lookups: Cell::new(0),
        });

        assert_eq!(board.occupied_count(), 1);
        assert!(!board.check_for_draw());
        assert!(board.render().contains("X"));

        let boxed: Box<Box<dyn GameBoard>> = Box::new(board);
        assert_eq!(boxed.occupied_count(), 1);
    }

    #[test]
    fn test_boxed_count_skips_square_scan() {
        let board = CountingBoard {
            inner: ArrayBoard::new(BoardDimensions::new(10, 10, 5).unwrap()),
            lookups: Cell::new(0),
        };
        let boxed: Box<CountingBoard> = Box::new(board);

        assert_eq!(boxed.occupied_count(), 0);
        assert!(!boxed.check_for_draw());
        assert_eq!(boxed.lookups.get(), 0);
    }
}
