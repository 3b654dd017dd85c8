//! Session score counters.

use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Win and draw counters for one session.
///
/// Survives [`crate::Game::new_round`]; only [`crate::Game::reset_scores`]
/// zeroes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scores {
    /// Creates zeroed scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Counters as `(x_wins, o_wins, draws)`.
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.x_wins, self.o_wins, self.draws)
    }

    #[instrument(skip(self))]
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins = self.x_wins.saturating_add(1),
            Player::O => self.o_wins = self.o_wins.saturating_add(1),
        }
        info!(x = self.x_wins, o = self.o_wins, draws = self.draws, "Score updated");
    }

    #[instrument(skip(self))]
    pub(crate) fn record_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
        info!(x = self.x_wins, o = self.o_wins, draws = self.draws, "Score updated");
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}   O: {}   Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
