//! Tests for the typestate game flow.

use extended_tictactoe::{
    BoardDimensions, BoardKind, GameConfig, GameFinished, GameInProgress, GameInvariants,
    GameResult, GameSettings, GameSetup, InvariantSet, Marker, MarkerSet, MoveError,
    MoveInvariants, Outcome, Position,
};

fn config(board_kind: BoardKind, markers: &str, rows: usize, columns: usize, k: usize) -> GameConfig {
    GameConfig::new(
        BoardDimensions::new(rows, columns, k).unwrap(),
        MarkerSet::new(markers.chars()).unwrap(),
        board_kind,
    )
}

fn play(game: GameInProgress, position: Position) -> GameInProgress {
    match game.make_move(position) {
        GameResult::InProgress(game) => game,
        other => panic!("Expected game to continue after {position}, got {other:?}"),
    }
}

fn finish(game: GameInProgress, position: Position) -> GameFinished {
    match game.make_move(position) {
        GameResult::Finished(done) => done,
        other => panic!("Expected game to finish at {position}, got {other:?}"),
    }
}

#[test]
fn test_two_player_win_on_both_boards() {
    for kind in [BoardKind::Fast, BoardKind::Memory] {
        let game = GameSetup::new(config(kind, "XO", 3, 3, 3)).start();
        let game = play(game, Position::new(0, 0));
        let game = play(game, Position::new(1, 0));
        let game = play(game, Position::new(1, 1));
        let game = play(game, Position::new(2, 0));
        let done = finish(game, Position::new(2, 2));

        assert_eq!(done.outcome(), Outcome::Winner(Marker::new('X').unwrap()));
        assert!(done.board().check_for_winner(Position::new(2, 2)));
    }
}

#[test]
fn test_draw_on_both_boards() {
    // X O X / X O O / O X X
    let order = [
        (0, 0), (0, 1), (0, 2), (1, 1), (1, 0),
        (1, 2), (2, 1), (2, 0), (2, 2),
    ];
    for kind in [BoardKind::Fast, BoardKind::Memory] {
        let mut game = GameSetup::new(config(kind, "XO", 3, 3, 3)).start();
        for &(row, column) in &order[..order.len() - 1] {
            game = play(game, Position::new(row, column));
            assert!(GameInvariants::check_all(&game).is_ok());
        }
        let done = finish(game, Position::new(2, 2));
        assert!(done.outcome().is_draw());
        assert!(done.board().check_for_draw());
        assert_eq!(done.history().len(), 9);
    }
}

#[test]
fn test_four_players_rotate() {
    let game = GameSetup::new(config(BoardKind::Memory, "ABCD", 6, 6, 4)).start();
    let mut game = game;
    let mut seen = String::new();
    for column in 0..6 {
        seen.push(game.to_move().symbol());
        game = play(game, Position::new(0, column));
    }
    assert_eq!(seen, "ABCDAB");
    assert_eq!(game.to_move().symbol(), 'C');
}

#[test]
fn test_rejection_keeps_turn() {
    let game = GameSetup::new(config(BoardKind::Fast, "XOZ", 4, 4, 3)).start();
    let game = play(game, Position::new(3, 3));

    let game = match game.make_move(Position::new(4, 0)) {
        GameResult::Rejected(game, MoveError::OutOfBounds(pos)) => {
            assert_eq!(pos, Position::new(4, 0));
            game
        }
        other => panic!("Expected out-of-bounds rejection, got {other:?}"),
    };
    let game = match game.make_move(Position::new(3, 3)) {
        GameResult::Rejected(game, MoveError::SpaceOccupied(_)) => game,
        other => panic!("Expected occupied rejection, got {other:?}"),
    };

    assert_eq!(game.to_move().symbol(), 'O');
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.board().occupied_count(), 1);
}

#[test]
fn test_winner_is_the_player_who_moved() {
    // Z completes the middle column on the third round.
    let game = GameSetup::new(config(BoardKind::Fast, "XOZ", 5, 5, 3)).start();
    let moves = [
        (0, 0), (4, 4), (1, 2),
        (0, 4), (4, 0), (2, 2),
        (0, 1), (4, 3),
    ];
    let mut game = game;
    for (row, column) in moves {
        game = play(game, Position::new(row, column));
    }
    let done = finish(game, Position::new(3, 2));
    assert_eq!(done.outcome().winner().map(Marker::symbol), Some('Z'));
}

#[test]
fn test_restart_after_finish() {
    let settings = GameSettings {
        board: BoardKind::Memory,
        ..GameSettings::default()
    };
    let moves = [
        Position::new(0, 0),
        Position::new(1, 0),
        Position::new(0, 1),
        Position::new(1, 1),
        Position::new(0, 2),
    ];
    let Ok(GameResult::Finished(done)) = GameInProgress::replay(settings.validate().unwrap(), &moves)
    else {
        panic!("Expected finished game");
    };
    assert_eq!(done.board().occupied_count(), 5);

    let setup = done.restart();
    assert_eq!(*setup.config().board_kind(), BoardKind::Memory);
    let game = setup.start();
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.valid_moves().len(), 9);
}

#[test]
fn test_valid_moves_shrink() {
    let game = GameSetup::new(config(BoardKind::Fast, "XO", 3, 4, 3)).start();
    assert_eq!(game.valid_moves().len(), 12);
    let game = play(game, Position::new(1, 1));
    let valid = game.valid_moves();
    assert_eq!(valid.len(), 11);
    assert!(!valid.contains(&Position::new(1, 1)));
}

#[test]
fn test_long_game_on_largest_memory_board() {
    // Row-major fill: each column belongs to one of the ten players, so
    // stopping before row 25 leaves every run short of the win length.
    let markers: String = extended_tictactoe::DEFAULT_MARKERS.iter().collect();
    let mut game = GameSetup::new(config(BoardKind::Memory, &markers, 100, 100, 25)).start();
    for row in 0..20 {
        for column in 0..100 {
            game = play(game, Position::new(row, column));
        }
    }

    assert_eq!(game.history().len(), 2000);
    assert_eq!(game.board().occupied_count(), 2000);
    assert_eq!(game.to_move().symbol(), 'X');
    assert!(GameInvariants::check_all(&game).is_ok());
    assert!(MoveInvariants::check_all(&game).is_ok());
}
