use battleship_cells::{
    computer_target, random_cell, validate_guess, Board, BoardError, BoardSetup, ConfigError,
    Game, GameConfig, GameError, GameStatus, GuessError, GuessResult, Outcome, Phase, Policy, Side,
    MAX_BOARD_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};

fn game_with(player: &[(usize, usize)], computer: &[(usize, usize)], policy: Policy) -> Game {
    Game::with_boards(
        Board::with_ships(5, player.iter().copied()).unwrap(),
        Board::with_ships(5, computer.iter().copied()).unwrap(),
        policy,
    )
    .unwrap()
}

#[test]
fn test_out_of_range_guesses_rejected() {
    let mut game = game_with(&[(0, 0)], &[(2, 2)], Policy::default());
    let before = game.computer_board().clone();
    for (row, col) in [(-1, 0), (0, -1), (5, 0), (0, 5), (100, 2), (2, 100)] {
        assert_eq!(
            game.player_move(row, col).unwrap_err(),
            GameError::Guess(GuessError::OutOfBounds { row, col })
        );
    }
    assert_eq!(game.computer_board(), &before);
    assert_eq!(game.turns_taken(), 0);
    assert_eq!(game.phase(), Phase::AwaitingPlayerGuess);
}

#[test]
fn test_repeat_guess_rejected() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = game_with(&[(0, 0), (4, 4)], &[(2, 2), (3, 3)], Policy::default());
    game.player_move(1, 1).unwrap();
    game.computer_move(&mut rng).unwrap();
    // one computer shot cannot sink two ships
    assert_eq!(game.phase(), Phase::AwaitingPlayerGuess);
    assert_eq!(
        game.player_move(1, 1).unwrap_err(),
        GameError::Guess(GuessError::AlreadyHit { row: 1, col: 1 })
    );
    assert_eq!(game.turns_taken(), 1);
    assert_eq!(
        validate_guess(game.computer_board(), 1, 1),
        Err(GuessError::AlreadyHit { row: 1, col: 1 })
    );
}

#[test]
fn test_turn_counter_counts_player_moves() {
    let mut rng = SmallRng::seed_from_u64(99);
    // two computer shots cannot sink three ships
    let mut game = game_with(&[(0, 0), (1, 1), (2, 2)], &[(4, 4), (3, 3)], Policy::default());
    assert_eq!(game.turn(), 1);

    let shot = game.player_move(0, 0).unwrap();
    assert_eq!(shot.result, GuessResult::Miss);
    assert_eq!(game.turns_taken(), 1);
    assert_eq!(game.turn(), 2);

    game.computer_move(&mut rng).unwrap();
    assert_eq!(game.turns_taken(), 1);

    let shot = game.player_move(4, 4).unwrap();
    assert_eq!(shot.result, GuessResult::Hit);
    assert_eq!(game.turns_taken(), 2);

    game.computer_move(&mut rng).unwrap();
    assert_eq!(game.turns_taken(), 2);
}

#[test]
fn test_player_wins() {
    let mut game = game_with(&[(0, 0)], &[(2, 2)], Policy::default());
    let shot = game.player_move(2, 2).unwrap();
    assert_eq!(shot.result, GuessResult::Hit);
    assert!(!shot.repeat);
    assert_eq!(game.phase(), Phase::Over(Outcome::Won));
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.turns_taken(), 1);
    assert_eq!(game.to_move(), None);

    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(game.player_move(0, 0).unwrap_err(), GameError::Finished);
    assert_eq!(game.computer_move(&mut rng).unwrap_err(), GameError::Finished);
}

#[test]
fn test_computer_wins_against_empty_fleet() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = game_with(&[], &[(2, 2)], Policy::default());
    game.player_move(0, 0).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    game.computer_move(&mut rng).unwrap();
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_mover_board_not_checked_after_own_move() {
    // the player's own fleet is empty, yet guessing does not lose the game
    let mut game = game_with(&[], &[(2, 2), (3, 3)], Policy::default());
    game.player_move(2, 2).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingComputerGuess);
}

#[test]
fn test_strict_alternation() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut game = game_with(&[(0, 0), (0, 1)], &[(2, 2), (3, 3)], Policy::default());
    assert_eq!(
        game.computer_move(&mut rng).unwrap_err(),
        GameError::OutOfTurn(Side::Computer)
    );
    game.player_move(1, 1).unwrap();
    assert_eq!(game.to_move(), Some(Side::Computer));
    assert_eq!(
        game.player_move(1, 2).unwrap_err(),
        GameError::OutOfTurn(Side::Player)
    );
}

#[test]
fn test_avoiding_repeats_never_targets_hit_cells() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut board = Board::with_ships(5, [(0, 0)]).unwrap();
    for _ in 0..25 {
        let (r, c) = computer_target(&mut rng, &board, true).unwrap();
        assert!(!board.is_cell_hit(r, c).unwrap());
        board.mark_cell(r, c).unwrap();
    }
    assert_eq!(board.unhit_cells().count(), 0);
    // a fully hit board still yields a target
    let (r, c) = computer_target(&mut rng, &board, true).unwrap();
    assert!(r < 5 && c < 5);
}

#[test]
fn test_memoryless_computer_can_repeat() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut board = BoardSetup::new(2).finish();
    let mut repeats = 0;
    for _ in 0..20 {
        let (r, c) = computer_target(&mut rng, &board, false).unwrap();
        if board.is_cell_hit(r, c).unwrap() {
            repeats += 1;
        }
        board.mark_cell(r, c).unwrap();
    }
    // 20 draws over 4 cells must repeat
    assert!(repeats >= 16);
}

#[test]
fn test_new_game_places_ships() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let config = GameConfig {
        policy: Policy {
            guarantee_distinct_ships: true,
            computer_avoids_repeats: false,
        },
        ..GameConfig::default()
    };
    let game = Game::new(&config, &mut rng).unwrap();
    assert_eq!(game.player_board().ship_count(), 3);
    assert_eq!(game.computer_board().ship_count(), 3);
    assert_eq!(game.player_board().size(), 5);

    let faithful = Game::new(&GameConfig::default(), &mut rng).unwrap();
    assert!((1..=3).contains(&faithful.player_board().ship_count()));
    assert!((1..=3).contains(&faithful.computer_board().ship_count()));
}

#[test]
fn test_invalid_config_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    let zero = GameConfig { size: 0, ..GameConfig::default() };
    assert!(matches!(
        Game::new(&zero, &mut rng),
        Err(GameError::Config(ConfigError::InvalidSize { .. }))
    ));

    let no_ships = GameConfig { ships: 0, ..GameConfig::default() };
    assert_eq!(no_ships.validate(), Err(ConfigError::NoShips));

    let crowded = GameConfig {
        size: 2,
        ships: 5,
        policy: Policy { guarantee_distinct_ships: true, computer_avoids_repeats: false },
    };
    assert_eq!(crowded.validate(), Err(ConfigError::TooManyShips { ships: 5, cells: 4 }));

    // duplicates are allowed to collapse when distinct ships are not required
    let loose = GameConfig { size: 2, ships: 5, ..GameConfig::default() };
    assert_eq!(loose.validate(), Ok(()));
}

#[test]
fn test_with_boards_rejects_unplayable_boards() {
    let empty = || Board::with_ships(0, std::iter::empty()).unwrap();
    let five = || Board::with_ships(5, [(2, 2), (3, 3)]).unwrap();

    assert_eq!(
        Game::with_boards(empty(), five(), Policy::default()).unwrap_err(),
        ConfigError::MismatchedBoards { player: 0, computer: 5 }
    );
    assert_eq!(
        Game::with_boards(five(), Board::with_ships(4, [(0, 0)]).unwrap(), Policy::default())
            .unwrap_err(),
        ConfigError::MismatchedBoards { player: 5, computer: 4 }
    );
    assert_eq!(
        Game::with_boards(empty(), empty(), Policy::default()).unwrap_err(),
        ConfigError::InvalidSize { size: 0, max: MAX_BOARD_SIZE }
    );
    let huge = MAX_BOARD_SIZE + 1;
    assert!(matches!(
        Game::with_boards(
            BoardSetup::new(huge).finish(),
            BoardSetup::new(huge).finish(),
            Policy::default()
        ),
        Err(ConfigError::InvalidSize { .. })
    ));
}

#[test]
fn test_targeting_empty_board_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(4);
    let board = BoardSetup::new(0).finish();
    assert_eq!(computer_target(&mut rng, &board, false), Err(BoardError::Empty));
    assert_eq!(computer_target(&mut rng, &board, true), Err(BoardError::Empty));
    assert_eq!(random_cell(&mut rng, 0), Err(BoardError::Empty));
    assert!(random_cell(&mut rng, 1).is_ok());
}
