//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::Move;
use super::invariants::{InvariantSet, MoveInvariants};
use super::typestate::GameInProgress;
use crate::MoveError;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions on the state after the action.
    fn post(after: &S) -> Result<(), MoveError>;
}

/// Precondition: the move's position is on the board.
#[derive(Debug, Clone, Copy)]
pub struct SpaceInBounds;

impl SpaceInBounds {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().in_bounds(mov.position) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(mov.position))
        }
    }
}

/// Precondition: the square at the move's position is empty.
#[derive(Debug, Clone, Copy)]
pub struct SpaceIsEmpty;

impl SpaceIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().check_space(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SpaceOccupied(mov.position))
        }
    }
}

/// Composite precondition: a move is legal if its square is on the
/// board and empty.
#[derive(Debug, Clone, Copy)]
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        SpaceInBounds::check(mov, game)?;
        SpaceIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for placing a marker.
///
/// Preconditions:
/// - Position is on the board
/// - Square is empty
///
/// Postconditions:
/// - The move's marker is on the board, one square per move
/// - The move came from the right player and the turn passed on
#[derive(Debug, Clone, Copy)]
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(after: &GameInProgress) -> Result<(), MoveError> {
        MoveInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameResult, GameSetup};
    use crate::{Marker, Position};

    fn x() -> Marker {
        Marker::new('X').unwrap()
    }

    #[test]
    fn test_precondition_empty_square() {
        let game = GameSetup::default().start();
        let action = Move::new(x(), Position::new(1, 1));
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameSetup::default().start();
        let GameResult::InProgress(game) = game.make_move(Position::new(1, 1)) else {
            panic!("Expected in-progress game");
        };

        let action = Move::new(game.to_move(), Position::new(1, 1));
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SpaceOccupied(Position::new(1, 1)))
        );
    }

    #[test]
    fn test_precondition_off_board() {
        let game = GameSetup::default().start();
        let action = Move::new(x(), Position::new(0, 3));
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::OutOfBounds(Position::new(0, 3)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::default().start();
        let GameResult::InProgress(after) = game.make_move(Position::new(1, 1)) else {
            panic!("Expected in-progress game");
        };
        assert!(MoveContract::post(&after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::default().start();
        let GameResult::InProgress(mut after) = game.make_move(Position::new(1, 1)) else {
            panic!("Expected in-progress game");
        };

        // Placement that bypassed the game's history.
        after.board.place_marker(Position::new(0, 0), x());

        assert!(matches!(
            MoveContract::post(&after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
