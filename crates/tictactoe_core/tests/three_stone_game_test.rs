//! End-to-end tests for the three-stone ruleset.

use tictactoe_core::{
    IllegalMove, MAX_STONES, Player, Position, RoundState, Square, ThreeStoneGame,
};

fn play(game: &mut ThreeStoneGame, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        game.attempt_move(row, col).expect("Valid move");
    }
}

#[test]
fn test_fourth_stone_evicts_oldest_first() {
    let mut game = ThreeStoneGame::new();
    // X: (0,0) (1,2) (2,1); O interleaves at (1,0) (2,0) (2,2).
    play(&mut game, &[(0, 0), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]);
    assert_eq!(game.next_eviction(), Some(Position::TopLeft));

    let outcome = game.attempt_move(0, 1).expect("Valid move");

    assert_eq!(outcome.evicted(), &Some(Position::TopLeft));
    assert_eq!(outcome.state(), &RoundState::InProgress);
    assert_eq!(game.board().get(Position::TopLeft), Square::Empty);
    assert_eq!(game.board().get(Position::TopCenter), Square::Occupied(Player::X));
    assert_eq!(
        game.stones(Player::X),
        vec![Position::MiddleRight, Position::BottomCenter, Position::TopCenter]
    );
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_three_in_a_row_wins_before_any_eviction() {
    // X's first three stones on the main diagonal already decide the round.
    let mut game = ThreeStoneGame::new();
    play(&mut game, &[(0, 0), (0, 1), (1, 1), (1, 0)]);

    let outcome = game.attempt_move(2, 2).expect("Valid move");

    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(
        game.attempt_move(0, 2),
        Err(IllegalMove::RoundOver(RoundState::Won(Player::X)))
    );
}

#[test]
fn test_evicted_stone_does_not_count_toward_a_line() {
    let mut game = ThreeStoneGame::new();
    // X holds (0,0) (0,1) (2,2); moving to (0,2) evicts (0,0) first.
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (2, 1), (2, 2), (1, 2)]);

    let outcome = game.attempt_move(0, 2).expect("Valid move");

    assert_eq!(outcome.evicted(), &Some(Position::TopLeft));
    assert_eq!(outcome.winner(), None);
    assert_eq!(game.state(), RoundState::InProgress);
}

#[test]
fn test_line_completed_after_eviction_wins() {
    let mut game = ThreeStoneGame::new();
    // X: (0,0) (1,1) (2,1); O: (1,0) (2,0) (0,2). X's fourth at (0,1) closes column 1.
    play(&mut game, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (0, 2)]);

    let outcome = game.attempt_move(0, 1).expect("Valid move");

    assert_eq!(outcome.evicted(), &Some(Position::TopLeft));
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(
        outcome.winning_line().map(|line| line.cells),
        Some([Position::TopCenter, Position::Center, Position::BottomCenter])
    );
    assert_eq!(game.scores().as_tuple(), (1, 0, 0));
}

#[test]
fn test_own_oldest_stone_is_not_a_legal_destination() {
    let mut game = ThreeStoneGame::new();
    play(&mut game, &[(0, 0), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]);
    let before = game.snapshot();

    assert_eq!(
        game.attempt_move(0, 0),
        Err(IllegalMove::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_opponent_may_take_a_freed_square() {
    let mut game = ThreeStoneGame::new();
    play(&mut game, &[(0, 0), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2), (0, 1)]);

    // O's fourth stone lands where X's evicted stone used to be.
    let outcome = game.attempt_move(0, 0).expect("Valid move");

    assert_eq!(outcome.evicted(), &Some(Position::MiddleLeft));
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(
        game.stones(Player::O),
        vec![Position::BottomLeft, Position::BottomRight, Position::TopLeft]
    );
}

#[test]
fn test_stones_never_exceed_limit_over_long_play() {
    let mut game = ThreeStoneGame::new();
    let mut moves = 0;
    // Walk the squares in a fixed order, skipping occupied ones, until the
    // round ends or plenty of evictions have happened.
    'outer: for _ in 0..10 {
        for pos in Position::ALL {
            if game.state().is_terminal() || moves >= 40 {
                break 'outer;
            }
            if game.attempt_move_at(pos).is_ok() {
                moves += 1;
                for player in [Player::X, Player::O] {
                    assert!(game.stones(player).len() <= MAX_STONES);
                    assert!(game.board().count(player) <= MAX_STONES);
                }
                assert_ne!(game.state(), RoundState::Draw);
            }
        }
    }
    assert!(moves > 0);
}

#[test]
fn test_new_round_clears_registry() {
    let mut game = ThreeStoneGame::new();
    play(&mut game, &[(0, 0), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2), (0, 1)]);

    game.new_round();

    assert!(game.stones(Player::X).is_empty());
    assert!(game.stones(Player::O).is_empty());
    assert!(game.rules().registry().is_empty());
    assert_eq!(game.next_eviction(), None);
}

#[test]
fn test_snapshot_serializes_for_renderers() {
    let mut game = ThreeStoneGame::new();
    play(&mut game, &[(0, 0), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]);

    let json = serde_json::to_value(game.snapshot()).expect("Snapshot serializes");

    assert_eq!(json["variant"], "three-stone");
    assert_eq!(json["to_move"], "X");
    assert_eq!(json["next_eviction"], "TopLeft");
    assert_eq!(json["x_stones"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["scores"]["draws"], 0);
}
