//! Property-based tests for both rulesets.

use proptest::prelude::*;
use tictactoe_core::rules::{LINES, check_winner, is_full};
use tictactoe_core::{
    Board, ClassicGame, Game, MAX_STONES, Player, Position, RoundState, Ruleset, Square,
    ThreeStoneGame,
};

/// Coordinates including one row/column past the board edge.
fn arb_coords() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..4, 0usize..4), 0..60)
}

/// All nine squares in random order.
fn arb_permutation() -> impl Strategy<Value = Vec<Position>> {
    Just(Position::ALL.to_vec()).prop_shuffle()
}

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

/// Plays every coordinate; checks that rejected moves change nothing and
/// that a concluded round rejects everything.
fn check_random_play<R: Ruleset>(game: &mut Game<R>, coords: &[(usize, usize)]) -> Result<(), TestCaseError> {
    for &(row, col) in coords {
        let before = game.snapshot();
        let was_over = game.state().is_terminal();
        match game.attempt_move(row, col) {
            Ok(outcome) => {
                prop_assert!(!was_over);
                prop_assert_eq!(outcome.state(), &game.state());
                prop_assert_eq!(outcome.scores(), &game.scores());
            }
            Err(_) => prop_assert_eq!(game.snapshot(), before),
        }
    }
    Ok(())
}

fn play_until_over(game: &mut ClassicGame, order: &[Position]) {
    for pos in order {
        if game.state().is_terminal() {
            break;
        }
        let _ = game.attempt_move_at(*pos);
    }
}

proptest! {
    #[test]
    fn rejected_moves_leave_classic_state_unchanged(coords in arb_coords()) {
        check_random_play(&mut ClassicGame::new(), &coords)?;
    }

    #[test]
    fn rejected_moves_leave_three_stone_state_unchanged(coords in arb_coords()) {
        check_random_play(&mut ThreeStoneGame::new(), &coords)?;
    }

    #[test]
    fn three_stone_registry_stays_bounded_and_consistent(coords in arb_coords()) {
        let mut game = ThreeStoneGame::new();
        for (row, col) in coords {
            let _ = game.attempt_move(row, col);
            for player in [Player::X, Player::O] {
                let stones = game.stones(player);
                prop_assert!(stones.len() <= MAX_STONES);
                prop_assert_eq!(stones.len(), game.board().count(player));
                for pos in stones {
                    prop_assert_eq!(game.board().get(pos), Square::Occupied(player));
                }
            }
            // At most six stones exist, so the board is never full.
            prop_assert_ne!(game.state(), RoundState::Draw);
        }
    }

    #[test]
    fn classic_round_ends_as_win_or_draw_consistently(order in arb_permutation()) {
        let mut game = ClassicGame::new();
        play_until_over(&mut game, &order);

        match game.state() {
            RoundState::Won(player) => {
                prop_assert_eq!(check_winner(game.board()), Some(player));
                prop_assert_eq!(game.scores().as_tuple().2, 0);
            }
            RoundState::Draw => {
                prop_assert!(is_full(game.board()));
                prop_assert_eq!(check_winner(game.board()), None);
                prop_assert_eq!(game.scores().as_tuple(), (0, 0, 1));
            }
            RoundState::InProgress => prop_assert!(false, "nine moves always end a round"),
        }
    }

    #[test]
    fn winner_does_not_depend_on_fill_order(order in arb_permutation()) {
        let mut game = ClassicGame::new();
        play_until_over(&mut game, &order);
        let RoundState::Won(winner) = game.state() else {
            return Ok(());
        };

        let cells = |player| {
            Position::ALL
                .into_iter()
                .filter(|pos| game.board().get(*pos) == Square::Occupied(player))
                .rev()
                .collect::<Vec<_>>()
        };
        let (xs, os) = (cells(Player::X), cells(Player::O));
        let mut replay = Vec::new();
        for i in 0..xs.len() {
            replay.push(xs[i]);
            if let Some(o) = os.get(i) {
                replay.push(*o);
            }
        }

        let mut other = ClassicGame::new();
        play_until_over(&mut other, &replay);
        prop_assert_eq!(other.state(), RoundState::Won(winner));
    }

    #[test]
    fn any_complete_line_is_detected(
        line in 0usize..8,
        player in prop_oneof![Just(Player::X), Just(Player::O)],
        filler in prop::array::uniform9(arb_square()),
    ) {
        let mut squares = filler;
        for pos in LINES[line] {
            squares[pos.to_index()] = Square::Occupied(player);
        }
        let board = Board::from_squares(squares);
        let opponent_has_line = LINES.iter().any(|cells| {
            cells
                .iter()
                .all(|pos| board.get(*pos) == Square::Occupied(player.opponent()))
        });
        prop_assume!(!opponent_has_line);

        prop_assert_eq!(check_winner(&board), Some(player));
    }

    #[test]
    fn reset_scores_always_restores_a_fresh_session(coords in arb_coords()) {
        let mut game = ThreeStoneGame::new();
        for (row, col) in coords {
            if game.attempt_move(row, col).is_err() && game.state().is_terminal() {
                game.new_round();
            }
        }

        game.reset_scores();

        prop_assert_eq!(game.scores().as_tuple(), (0, 0, 0));
        prop_assert_eq!(game.state(), RoundState::InProgress);
        prop_assert_eq!(game.to_move(), Player::X);
        prop_assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    }
}
