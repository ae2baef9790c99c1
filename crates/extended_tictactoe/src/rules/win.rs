//! Win detection by scanning outward from the last move.
//!
//! Only the four lines through the square just played can have changed,
//! so detection walks outward from that square along each axis instead of
//! rescanning the board. Each walk stops at the first square that does
//! not hold the same marker, or at the board edge.

use crate::{GameBoard, Marker, Position, Square};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, trace};

/// A line through a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// Unit step `(row, column)` in the axis' forward direction.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Counts consecutive squares holding `marker`, starting one step from
/// `origin` and moving by `(row_step, column_step)`.
///
/// `origin` itself is not counted. Never reads off the board.
pub fn count_direction<B: GameBoard + ?Sized>(
    board: &B,
    origin: Position,
    marker: Marker,
    (row_step, column_step): (isize, isize),
) -> usize {
    let dimensions = board.dimensions();
    let mut count = 0;
    let mut current = origin;

    while let Some(next) = dimensions.step(current, row_step, column_step) {
        if !board.is_player_at_pos(next, marker) {
            break;
        }
        count += 1;
        current = next;
    }

    count
}

/// Length of the run of `marker` through `origin` along `axis`.
///
/// The origin square is counted exactly once, whatever it holds.
pub fn run_length<B: GameBoard + ?Sized>(
    board: &B,
    origin: Position,
    marker: Marker,
    axis: Axis,
) -> usize {
    let (row_step, column_step) = axis.step();
    let forward = count_direction(board, origin, marker, (row_step, column_step));
    let backward = count_direction(board, origin, marker, (-row_step, -column_step));
    let total = 1 + forward + backward;
    trace!(%origin, %axis, forward, backward, total, "Run measured");
    total
}

/// First axis on which the marker at `last_pos` forms a run of at least
/// the win length. `None` if `last_pos` is empty or off the board.
#[instrument(skip(board))]
pub fn winning_axis<B: GameBoard + ?Sized>(board: &B, last_pos: Position) -> Option<Axis> {
    if !board.in_bounds(last_pos) {
        return None;
    }
    let Square::Occupied(marker) = board.whats_at_pos(last_pos) else {
        return None;
    };

    let win_length = board.num_to_win();
    let axis = Axis::iter().find(|axis| run_length(board, last_pos, marker, *axis) >= win_length);
    if let Some(axis) = axis {
        debug!(%last_pos, %marker, %axis, "Winning run found");
    }
    axis
}

/// True if the move at `last_pos` completed a winning run.
pub fn check_winner<B: GameBoard + ?Sized>(board: &B, last_pos: Position) -> bool {
    winning_axis(board, last_pos).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayBoard, BoardDimensions, SparseBoard};

    fn marker(symbol: char) -> Marker {
        Marker::new(symbol).unwrap()
    }

    fn place_all(board: &mut dyn GameBoard, symbol: char, cells: &[(usize, usize)]) {
        for &(row, column) in cells {
            board.place_marker(Position::new(row, column), marker(symbol));
        }
    }

    #[test]
    fn test_center_counted_once() {
        let mut board = ArrayBoard::new(BoardDimensions::new(5, 5, 3).unwrap());
        place_all(&mut board, 'X', &[(2, 1), (2, 2), (2, 3)]);
        let x = marker('X');
        assert_eq!(run_length(&board, Position::new(2, 2), x, Axis::Horizontal), 3);
        assert_eq!(run_length(&board, Position::new(2, 2), x, Axis::Vertical), 1);
        assert_eq!(run_length(&board, Position::new(2, 1), x, Axis::Horizontal), 3);
    }

    #[test]
    fn test_diagonal_center_counted_once() {
        let mut board = SparseBoard::new(BoardDimensions::new(5, 5, 3).unwrap());
        place_all(&mut board, 'O', &[(0, 4), (1, 3), (2, 2), (3, 1)]);
        let o = marker('O');
        assert_eq!(run_length(&board, Position::new(2, 2), o, Axis::AntiDiagonal), 4);
        assert_eq!(run_length(&board, Position::new(2, 2), o, Axis::Diagonal), 1);
    }

    #[test]
    fn test_count_stops_at_other_marker() {
        let mut board = ArrayBoard::new(BoardDimensions::new(3, 6, 3).unwrap());
        place_all(&mut board, 'X', &[(0, 0), (0, 1)]);
        place_all(&mut board, 'O', &[(0, 2)]);
        place_all(&mut board, 'X', &[(0, 3)]);
        let x = marker('X');
        assert_eq!(count_direction(&board, Position::new(0, 0), x, (0, 1)), 1);
        assert_eq!(count_direction(&board, Position::new(0, 3), x, (0, -1)), 0);
    }

    #[test]
    fn test_count_stops_at_edge() {
        let mut board = ArrayBoard::new(BoardDimensions::new(3, 3, 3).unwrap());
        place_all(&mut board, 'X', &[(0, 0), (0, 1), (0, 2)]);
        let x = marker('X');
        assert_eq!(count_direction(&board, Position::new(0, 0), x, (0, -1)), 0);
        assert_eq!(count_direction(&board, Position::new(0, 0), x, (-1, -1)), 0);
        assert_eq!(count_direction(&board, Position::new(0, 0), x, (0, 1)), 2);
    }

    #[test]
    fn test_winning_axis_reports_direction() {
        let mut board = ArrayBoard::new(BoardDimensions::new(4, 4, 3).unwrap());
        place_all(&mut board, 'X', &[(0, 3), (1, 3), (2, 3)]);
        assert_eq!(winning_axis(&board, Position::new(2, 3)), Some(Axis::Vertical));
    }

    #[test]
    fn test_empty_or_off_board_never_wins() {
        let board = ArrayBoard::new(BoardDimensions::new(3, 3, 3).unwrap());
        assert!(!check_winner(&board, Position::new(1, 1)));
        assert!(!check_winner(&board, Position::new(7, 7)));
    }
}
