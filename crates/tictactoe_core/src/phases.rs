//! Round state machine.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// State of the current round.
///
/// Only moves forward: `InProgress` to one of the terminal states. A new
/// round is the only way back to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// Round is ongoing.
    #[default]
    InProgress,
    /// Round ended with three in a row.
    Won(Player),
    /// Round ended on a full board without a line.
    Draw,
}

impl RoundState {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundState::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the round has concluded.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::InProgress)
    }
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundState::InProgress => write!(f, "In progress"),
            RoundState::Won(player) => write!(f, "Player {} wins", player),
            RoundState::Draw => write!(f, "Draw"),
        }
    }
}
