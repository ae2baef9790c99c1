//! Monotonic board invariant: squares never change once set.

use super::super::typestate::GameInProgress;
use super::Invariant;
use crate::{ArrayBoard, GameBoard};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Replaying the move history onto a fresh dense board must never land
/// on an occupied square, and must reproduce the current board exactly.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        let mut reconstructed = ArrayBoard::new(board.dimensions());

        for mov in game.history() {
            if !reconstructed.check_space(mov.position) {
                return false;
            }
            reconstructed.place_marker(mov.position, mov.marker);
        }

        board
            .dimensions()
            .positions()
            .all(|pos| reconstructed.whats_at_pos(pos) == board.whats_at_pos(pos))
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::invariants::forge_game;
    use crate::game::{GameResult, GameSetup, Move};
    use crate::{GameConfig, Marker, Position};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::default().start();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_single_move_holds() {
        let game = GameSetup::default().start();
        let GameResult::InProgress(game) = game.make_move(Position::new(1, 1)) else {
            panic!("Expected in-progress game");
        };
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_position_in_history_violates() {
        let x = Marker::new('X').unwrap();
        let o = Marker::new('O').unwrap();
        let history = vec![
            Move::new(x, Position::new(1, 1)),
            Move::new(o, Position::new(1, 1)),
        ];
        let game = forge_game(GameConfig::default(), history, 0);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_marker_violates() {
        let game = GameSetup::default().start();
        let GameResult::InProgress(mut game) = game.make_move(Position::new(1, 1)) else {
            panic!("Expected in-progress game");
        };
        game.board
            .place_marker(Position::new(0, 0), Marker::new('O').unwrap());
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
