//! Text grid rendering for diagnostics and tests.
//!
//! ```text
//!    00|01|02|
//! 00|X |  |  |
//! 01|  |O |  |
//! 02|  |  |  |
//! ```

use crate::{GameBoard, Position};
use std::fmt::Write;
use tracing::instrument;

/// Renders the board with two-digit, zero-padded row and column labels.
///
/// Every line, including the last, ends with a newline.
#[instrument(skip(board), fields(rows = board.num_rows(), columns = board.num_columns()))]
pub fn render_grid<B: GameBoard + ?Sized>(board: &B) -> String {
    let rows = board.num_rows();
    let columns = board.num_columns();
    let mut out = String::with_capacity((rows + 1) * (columns + 1) * 3 + rows + 1);

    out.push_str("   ");
    for column in 0..columns {
        // Writing to a String cannot fail.
        let _ = write!(out, "{column:02}|");
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:02}|");
        for column in 0..columns {
            let symbol = board.whats_at_pos(Position::new(row, column)).symbol();
            let _ = write!(out, "{symbol} |");
        }
        out.push('\n');
    }

    out
}
