//! Per-move invariants: only what the latest move changed.
//!
//! The whole-game invariants rescan the board and history. These look at
//! the last move alone, so checking them after every move stays cheap on
//! the largest boards.

use super::super::typestate::GameInProgress;
use super::Invariant;

/// Invariant: the last move is on the board, and one square was filled
/// per move.
#[derive(Debug, Clone, Copy)]
pub struct LastMovePlacedInvariant;

impl Invariant<GameInProgress> for LastMovePlacedInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let board = game.board();
        let placed = game
            .history()
            .last()
            .is_none_or(|mov| board.is_player_at_pos(mov.position, mov.marker));

        placed && board.occupied_count() == game.history().len()
    }

    fn description() -> &'static str {
        "Last move is on the board and occupied squares match the move count"
    }
}

/// Invariant: the last move came from the right slot, and the turn passed
/// to the slot after it.
#[derive(Debug, Clone, Copy)]
pub struct NextTurnInvariant;

impl Invariant<GameInProgress> for NextTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let markers = game.config().markers();
        let moves = game.history().len();

        let last_in_order = match game.history().last() {
            Some(mov) => markers.get((moves - 1) % markers.len()) == Some(mov.marker),
            None => true,
        };

        last_in_order && game.turn() == moves % markers.len()
    }

    fn description() -> &'static str {
        "Last move came from the right player and the turn passed on"
    }
}
