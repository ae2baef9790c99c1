//! Line-oriented game controller.
//!
//! Reads one position per line, applies it to the current game and
//! writes the board and a status message after every accepted move.

use extended_tictactoe::{
    GameConfig, GameFinished, GameInProgress, GameResult, GameSetup, Outcome, Position,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Message shown when a move is refused.
pub const UNAVAILABLE: &str = "That space is unavailable, please pick again";

/// What the caller should do after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Keep reading input.
    Continue,
    /// The player asked to stop.
    Quit,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Playing(GameInProgress),
    Over(GameFinished),
}

/// Drives games from a line-based input to a text output.
///
/// Any input after a game ends starts a new game on a fresh board with
/// the same configuration.
#[derive(Debug)]
pub struct Controller<R, W> {
    config: GameConfig,
    input: R,
    output: W,
    phase: Phase,
    outcomes: Vec<Outcome>,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Creates a controller. No game is started until [`run`](Self::run).
    #[instrument(skip(input, output))]
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
            phase: Phase::Idle,
            outcomes: Vec::new(),
        }
    }

    /// Plays until `quit` or end of input, returning every finished
    /// game's outcome.
    #[instrument(skip(self))]
    pub fn run(mut self) -> io::Result<Vec<Outcome>> {
        self.start(GameSetup::new(self.config.clone()))?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if self.process_input(line.trim())? == Prompt::Quit {
                break;
            }
        }

        self.output.flush()?;
        info!(games = self.outcomes.len(), "Session ended");
        Ok(self.outcomes)
    }

    /// Handles one line of input.
    #[instrument(skip(self))]
    pub fn process_input(&mut self, line: &str) -> io::Result<Prompt> {
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return Ok(Prompt::Quit);
        }

        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Playing(game) => self.play(game, line)?,
            Phase::Over(done) => self.start(done.restart())?,
            Phase::Idle => self.start(GameSetup::new(self.config.clone()))?,
        }
        Ok(Prompt::Continue)
    }

    fn play(&mut self, game: GameInProgress, line: &str) -> io::Result<()> {
        let position = match line.parse::<Position>() {
            Ok(position) => position,
            Err(error) => {
                debug!(%error, "Unreadable position");
                writeln!(self.output, "Enter a position as <row>,<column>")?;
                self.phase = Phase::Playing(game);
                return Ok(());
            }
        };

        match game.make_move(position) {
            GameResult::InProgress(game) => {
                write!(self.output, "{}", game.board().render())?;
                writeln!(self.output, "{}'s turn:", game.to_move())?;
                self.phase = Phase::Playing(game);
            }
            GameResult::Rejected(game, error) => {
                warn!(%error, "Move rejected");
                writeln!(self.output, "{UNAVAILABLE}")?;
                self.phase = Phase::Playing(game);
            }
            GameResult::Finished(done) => {
                write!(self.output, "{}", done.board().render())?;
                match done.outcome() {
                    Outcome::Winner(marker) => {
                        writeln!(self.output, "{marker} wins! Press enter to play again")?;
                    }
                    Outcome::Draw => writeln!(self.output, "Draw! Press enter to play again")?,
                }
                self.outcomes.push(done.outcome());
                self.phase = Phase::Over(done);
            }
        }
        Ok(())
    }

    fn start(&mut self, setup: GameSetup) -> io::Result<()> {
        let game = setup.start();

        write!(self.output, "{}", game.board().render())?;
        writeln!(self.output, "{}'s turn:", game.to_move())?;
        self.phase = Phase::Playing(game);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extended_tictactoe::{GameSettings, Marker};

    fn run(settings: GameSettings, input: &str) -> (Vec<Outcome>, String) {
        let config = settings.validate().unwrap();
        let mut output = Vec::new();
        let outcomes = Controller::new(config, input.as_bytes(), &mut output)
            .run()
            .unwrap();
        (outcomes, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_win_reported() {
        let (outcomes, output) = run(GameSettings::default(), "0,0\n1,0\n0,1\n1,1\n0,2\n");
        assert_eq!(outcomes, vec![Outcome::Winner(Marker::new('X').unwrap())]);
        assert!(output.contains("X wins! Press enter to play again"));
        assert!(output.contains("O's turn:"));
    }

    #[test]
    fn test_unavailable_space_reported() {
        let (outcomes, output) = run(GameSettings::default(), "1,1\n1,1\n5,5\n");
        assert!(outcomes.is_empty());
        assert_eq!(output.matches(UNAVAILABLE).count(), 2);
    }

    #[test]
    fn test_unparseable_input_reprompts() {
        let (_, output) = run(GameSettings::default(), "middle\n");
        assert!(output.contains("Enter a position as <row>,<column>"));
    }

    #[test]
    fn test_input_after_finish_starts_new_game() {
        let input = "0,0\n1,0\n0,1\n1,1\n0,2\n\n0,0\n";
        let (outcomes, output) = run(GameSettings::default(), input);
        assert_eq!(outcomes.len(), 1);
        // Initial board, five moves, fresh board, one more move.
        assert_eq!(output.matches("   00|01|02|").count(), 8);
        assert!(output.ends_with("O's turn:\n"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (outcomes, output) = run(GameSettings::default(), "quit\n0,0\n");
        assert!(outcomes.is_empty());
        assert_eq!(output.matches("X's turn:").count(), 1);
    }
}
