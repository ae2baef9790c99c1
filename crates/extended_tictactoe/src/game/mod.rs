//! Caller-side game flow built on a [`GameBoard`](crate::GameBoard).
//!
//! The board knows nothing about turns. This module owns turn order,
//! move admission and the AwaitingMove -> {continue, won, drawn} state
//! machine, encoded as distinct types per phase.

mod action;
mod contracts;
mod invariants;
mod phases;
mod typestate;

pub use action::Move;
pub use contracts::{Contract, LegalMove, MoveContract, SpaceInBounds, SpaceIsEmpty};
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    LastMovePlacedInvariant, MonotonicBoardInvariant, MoveInvariants, NextTurnInvariant,
    RoundRobinTurnInvariant,
};
pub use phases::Outcome;
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
