//! Three-stone invariants: stone limit and registry/board agreement.

use super::Invariant;
use crate::registry::MAX_STONES;
use crate::{Game, Player, Square, ThreeStone};
use tracing::warn;

/// Invariant: no player ever holds more than three stones.
pub struct StoneLimitInvariant;

impl Invariant<Game<ThreeStone>> for StoneLimitInvariant {
    fn holds(game: &Game<ThreeStone>) -> bool {
        [Player::X, Player::O].into_iter().all(|player| {
            let on_board = game.board().count(player);
            let tracked = game.rules().registry().len(player);
            let valid = on_board <= MAX_STONES && tracked <= MAX_STONES;
            if !valid {
                warn!(?player, on_board, tracked, "Stone limit violated");
            }
            valid
        })
    }

    fn description() -> &'static str {
        "No player holds more than three stones"
    }
}

/// Invariant: the registry lists exactly the squares each player occupies.
pub struct RegistryConsistentInvariant;

impl Invariant<Game<ThreeStone>> for RegistryConsistentInvariant {
    fn holds(game: &Game<ThreeStone>) -> bool {
        let registry = game.rules().registry();
        [Player::X, Player::O].into_iter().all(|player| {
            let mut seen = Vec::with_capacity(MAX_STONES);
            for pos in registry.stones(player) {
                if seen.contains(&pos) || game.board().get(pos) != Square::Occupied(player) {
                    warn!(?player, ?pos, "Registry entry does not match board");
                    return false;
                }
                seen.push(pos);
            }
            let valid = seen.len() == game.board().count(player);
            if !valid {
                warn!(?player, tracked = seen.len(), "Board holds untracked stones");
            }
            valid
        })
    }

    fn description() -> &'static str {
        "Registry and board agree on every player's stones"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, ThreeStoneGame};

    fn rotating_game() -> ThreeStoneGame {
        let mut game = ThreeStoneGame::new();
        // X: (0,0) (1,1) (2,1) (0,2); O: (0,1) (1,0) (2,2). X's fourth evicts (0,0).
        for (row, col) in [(0, 0), (0, 1), (1, 1), (1, 0), (2, 1), (2, 2), (0, 2)] {
            game.attempt_move(row, col).expect("legal move");
        }
        game
    }

    #[test]
    fn test_holds_across_evictions() {
        let game = rotating_game();
        assert!(StoneLimitInvariant::holds(&game));
        assert!(RegistryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_detects_untracked_stone() {
        let mut game = rotating_game();
        game.board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!RegistryConsistentInvariant::holds(&game));
        assert!(!StoneLimitInvariant::holds(&game));
    }

    #[test]
    fn test_detects_cleared_tracked_stone() {
        let mut game = rotating_game();
        game.board.set(Position::Center, Square::Empty);
        assert!(!RegistryConsistentInvariant::holds(&game));
        assert!(StoneLimitInvariant::holds(&game));
    }
}
