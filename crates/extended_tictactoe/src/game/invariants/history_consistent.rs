//! History consistency invariant: the board holds exactly the moves played.

use super::super::typestate::GameInProgress;
use super::Invariant;

/// Invariant: every recorded move is on the board, and nothing else is.
#[derive(Debug, Clone, Copy)]
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        board.occupied_count() == game.history().len()
            && game
                .history()
                .iter()
                .all(|mov| board.is_player_at_pos(mov.position, mov.marker))
    }

    fn description() -> &'static str {
        "Occupied squares match the move history"
    }
}
