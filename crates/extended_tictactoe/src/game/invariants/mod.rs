//! First-class invariants for a game in progress.
//!
//! Invariants are logical properties that must hold throughout a game.
//! [`MoveInvariants`] are checked after every move in debug builds.
//! [`GameInvariants`] audit the whole game and are checked on demand.

mod history_consistent;
mod last_move;
mod monotonic_board;
mod round_robin_turn;

pub use history_consistent::HistoryConsistentInvariant;
pub use last_move::{LastMovePlacedInvariant, NextTurnInvariant};
pub use monotonic_board::MonotonicBoardInvariant;
pub use round_robin_turn::RoundRobinTurnInvariant;

use super::typestate::GameInProgress;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant of a game in progress, checked over the whole board
/// and history.
pub type GameInvariants = (
    MonotonicBoardInvariant,
    RoundRobinTurnInvariant,
    HistoryConsistentInvariant,
);

/// Invariants touched by a single move. Cost does not grow with the
/// board size.
pub type MoveInvariants = (LastMovePlacedInvariant, NextTurnInvariant);

/// Builds an in-progress game from parts, bypassing move validation.
#[cfg(test)]
pub(crate) fn forge_game(
    config: crate::GameConfig,
    history: Vec<super::Move>,
    turn: usize,
) -> GameInProgress {
    use crate::GameBoard;

    let mut board = config.board_kind().build(*config.dimensions());
    for mov in &history {
        if board.check_space(mov.position) {
            board.place_marker(mov.position, mov.marker);
        }
    }
    GameInProgress {
        config,
        board,
        history,
        turn,
    }
}
