//! Stone-count invariants shared by both rulesets.

use super::Invariant;
use crate::{Game, Player, RoundState, Ruleset};
use tracing::warn;

/// Invariant: X holds as many stones as O, or exactly one more.
///
/// X always opens the round and players alternate, so in both variants
/// the counts can never drift further apart.
pub struct MarkBalanceInvariant;

impl<R: Ruleset> Invariant<Game<R>> for MarkBalanceInvariant {
    fn holds(game: &Game<R>) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X holds as many stones as O or one more"
    }
}

/// Invariant: in a running classic round, X is to move exactly when the
/// stone counts are equal.
///
/// Does not apply to the three-stone variant, where evictions keep the
/// counts level while turns still alternate.
pub struct TurnParityInvariant;

impl<R: Ruleset> Invariant<Game<R>> for TurnParityInvariant {
    fn holds(game: &Game<R>) -> bool {
        if game.state() != RoundState::InProgress {
            return true;
        }
        let level = game.board().count(Player::X) == game.board().count(Player::O);
        let valid = level == (game.to_move() == Player::X);
        if !valid {
            warn!(to_move = ?game.to_move(), level, "Turn parity violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X is to move exactly when both players hold the same number of stones"
    }
}
