//! Phase-specific typestate structs for a game.
//!
//! Each phase is its own type. A `GameFinished` always has an outcome,
//! and only a `GameInProgress` accepts moves.

use super::action::Move;
use super::contracts::{Contract, MoveContract};
use super::phases::Outcome;
use crate::{GameBoard, GameConfig, Marker, MoveError, Position};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game ready to start from a validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    config: GameConfig,
}

impl GameSetup {
    /// Creates a game in setup phase.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Starts the game on a fresh, empty board. The first marker moves
    /// first.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        let board = self.config.board_kind().build(*self.config.dimensions());
        info!(
            rows = board.num_rows(),
            columns = board.num_columns(),
            win_length = board.num_to_win(),
            players = self.config.markers().len(),
            board_kind = %self.config.board_kind(),
            "Game started"
        );
        GameInProgress {
            config: self.config,
            board,
            history: Vec::new(),
            turn: 0,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game awaiting a move.
///
/// The board is exclusively owned by this game.
#[derive(Debug)]
pub struct GameInProgress {
    pub(super) config: GameConfig,
    pub(super) board: Box<dyn GameBoard>,
    pub(super) history: Vec<Move>,
    pub(super) turn: usize,
}

impl GameInProgress {
    /// Plays the current player's marker at `position`.
    ///
    /// An unavailable position hands the game back untouched in
    /// [`GameResult::Rejected`]. Otherwise the marker is placed, then the
    /// game checks for a winner, then for a draw, and finally passes the
    /// turn to the next player in order.
    #[instrument(skip(self), fields(marker = %self.to_move()))]
    pub fn make_move(self, position: Position) -> GameResult {
        let action = Move::new(self.to_move(), position);

        if let Err(error) = MoveContract::pre(&self, &action) {
            debug!(%error, "Move rejected");
            return GameResult::Rejected(self, error);
        }

        let mut game = self;
        game.board.place_marker(position, action.marker);
        game.history.push(action);

        if game.board.check_for_winner(position) {
            info!(winner = %action.marker, moves = game.history.len(), "Game won");
            return GameResult::Finished(game.finish(Outcome::Winner(action.marker)));
        }

        if game.board.check_for_draw() {
            info!(moves = game.history.len(), "Game drawn");
            return GameResult::Finished(game.finish(Outcome::Draw));
        }

        game.turn = game.config.markers().next_after(game.turn);

        debug_assert!(
            MoveContract::post(&game).is_ok(),
            "move postcondition failed after {action}"
        );

        GameResult::InProgress(game)
    }

    /// Marker of the player to move.
    pub fn to_move(&self) -> Marker {
        // `turn` only ever comes from `next_after` on a validated set of
        // at least two markers, so it is always a valid slot.
        self.config.markers().as_slice()[self.turn]
    }

    /// Turn slot of the player to move.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the board.
    pub fn board(&self) -> &dyn GameBoard {
        self.board.as_ref()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Every position the current player could take.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board
            .dimensions()
            .positions()
            .filter(|pos| self.board.check_space(*pos))
            .collect()
    }

    /// Plays `positions` in order from a fresh game.
    ///
    /// Stops early if the game finishes. The first rejected position is
    /// returned as an error.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(config: GameConfig, positions: &[Position]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new(config).start();

        for &position in positions {
            match game.make_move(position) {
                GameResult::InProgress(next) => game = next,
                GameResult::Rejected(_, error) => return Err(error),
                finished @ GameResult::Finished(_) => return Ok(finished),
            }
        }

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            config: self.config,
            board: self.board,
            history: self.history,
            outcome,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game over, with the outcome always present.
///
/// Win and draw queries on the board stay valid, but no further moves
/// are accepted. Any further play starts over from [`restart`](Self::restart).
#[derive(Debug)]
pub struct GameFinished {
    config: GameConfig,
    board: Box<dyn GameBoard>,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the final board.
    pub fn board(&self) -> &dyn GameBoard {
        self.board.as_ref()
    }

    /// Returns the moves played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Discards the board and returns to setup with the same
    /// configuration. The next `start` builds a new board.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new(self.config)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of attempting a move.
#[derive(Debug)]
pub enum GameResult {
    /// The move was applied and the game continues.
    InProgress(GameInProgress),
    /// The move was refused; the game is unchanged.
    Rejected(GameInProgress, MoveError),
    /// The move ended the game.
    Finished(GameFinished),
}
