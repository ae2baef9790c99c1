//! Draw detection.

use crate::GameBoard;

/// True if every square on the board is occupied.
///
/// A full board with no winner is a draw. Costs whatever the board's
/// `occupied_count` costs, O(rows x columns) at worst.
pub fn is_full<B: GameBoard + ?Sized>(board: &B) -> bool {
    board.occupied_count() >= board.dimensions().cell_count()
}
