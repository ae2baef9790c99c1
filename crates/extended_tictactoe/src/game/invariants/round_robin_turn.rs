//! Round-robin turn invariant: markers move in configured order.

use super::super::typestate::GameInProgress;
use super::Invariant;

/// Invariant: players move in marker-set order, wrapping after the last.
///
/// The n-th move in history belongs to slot `n % players`, and the
/// player to move is the slot after the last move.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinTurnInvariant;

impl Invariant<GameInProgress> for RoundRobinTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let markers = game.config().markers();
        let players = markers.len();

        let in_order = game
            .history()
            .iter()
            .enumerate()
            .all(|(index, mov)| markers.get(index % players) == Some(mov.marker));

        in_order && game.turn() == game.history().len() % players
    }

    fn description() -> &'static str {
        "Players move in marker order, wrapping after the last"
    }
}
