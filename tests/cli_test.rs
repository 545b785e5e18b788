use std::io::Cursor;

use seabattle::{
    AiPlayer, AttackResult, Board, CliPlayer, Game, GameConfig, GameStatus, Orientation, Player,
    Ship, ShipSpec,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn cli(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_select_target_reprompts_on_bad_input() {
    let mut rng = SmallRng::seed_from_u64(1);
    let board = Board::new(5).unwrap();
    let mut player = cli("\nZ1\nA9\nb\nc2\n");
    assert_eq!(player.select_target(&mut rng, &board).unwrap(), (2, 1));

    let out = String::from_utf8(player.into_output()).unwrap();
    assert_eq!(out.matches("Enter attack coordinates (letter number): ").count(), 5);
    assert_eq!(out.matches("Invalid coordinate").count(), 4);
    assert!(out.contains("row 'Z' out of bounds, must be A-E"));
    assert!(out.contains("column 9 out of bounds, must be 1-5"));
}

#[test]
fn test_select_target_fails_on_closed_input() {
    let mut rng = SmallRng::seed_from_u64(1);
    let board = Board::new(5).unwrap();
    let mut player = cli("nonsense\n");
    assert!(player.select_target(&mut rng, &board).is_err());
}

#[test]
fn test_begin_turn_draws_boards() {
    let mut own = Board::new(3).unwrap();
    own.place(&Ship::new('L', 1).at(0, 0, Orientation::Horizontal))
        .unwrap();
    let mut target = Board::new(3).unwrap();
    target
        .place(&Ship::new('S', 2).at(2, 0, Orientation::Horizontal))
        .unwrap();

    let mut player = cli("");
    player.begin_turn(&own, &target).unwrap();
    let out = String::from_utf8(player.into_output()).unwrap();
    assert!(out.contains("MY FLEET"));
    assert!(out.contains("A L ~ ~ "));
    assert!(out.contains("MY SHOTS"));
    assert!(!out.contains("S S"));
    assert!(!out.contains("OPPONENT FLEET"));

    let mut player = cli("").reveal_opponent(true);
    player.begin_turn(&own, &target).unwrap();
    let out = String::from_utf8(player.into_output()).unwrap();
    assert!(out.contains("OPPONENT FLEET"));
    assert!(out.contains("C S S ~ "));
}

#[test]
fn test_result_messages() {
    let mut player = cli("");
    player.handle_guess_result((0, 0), AttackResult::Hit).unwrap();
    player.handle_guess_result((1, 2), AttackResult::Miss).unwrap();
    player
        .handle_guess_result((1, 2), AttackResult::AlreadyAttacked)
        .unwrap();
    player
        .handle_opponent_guess((3, 9), AttackResult::Miss)
        .unwrap();
    let out = String::from_utf8(player.into_output()).unwrap();
    assert!(out.contains("A1 -> hit!"));
    assert!(out.contains("B3 -> miss."));
    assert!(out.contains("You already fired at B3, try again."));
    assert!(out.contains("Opponent fired at D10 -> Miss"));
}

#[test]
fn test_scripted_human_game_finishes() {
    // Fire at every cell of a 3x3 board in order, with an invalid entry and
    // a repeat thrown in; the game ends before input runs out.
    let script = "Q7\nA1\nA1\nA2\nA3\nB1\nB2\nB3\nC1\nC2\nC3\n";
    let mut rng = SmallRng::seed_from_u64(99);
    let mut human = cli(script);
    let mut computer = AiPlayer::new();
    let mut game = Game::new(GameConfig::new(3, vec![ShipSpec::new('L', 1)])).unwrap();
    game.setup(&mut human, &mut computer, &mut rng).unwrap();
    let status = game.run(&mut human, &mut computer, &mut rng).unwrap();
    assert_ne!(status, GameStatus::InProgress);

    let out = String::from_utf8(human.into_output()).unwrap();
    assert!(out.contains("Invalid coordinate"));
    if game.rounds() > 1 {
        assert!(out.contains("You already fired at A1, try again."));
    }
    match status {
        GameStatus::Won => assert!(out.contains("-> hit!")),
        _ => assert!(game.player_board().all_sunk()),
    }
}
