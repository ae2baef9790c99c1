//! Win and draw detection.
//!
//! These functions are written against the [`GameBoard`](crate::GameBoard)
//! primitives only, so every storage strategy shares them through the
//! trait's default methods.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Axis, check_winner, count_direction, run_length, winning_axis};
