//! Per-player stone order for the three-stone ruleset.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Maximum number of stones a player may hold at once.
pub const MAX_STONES: usize = 3;

/// Placement order of each player's surviving stones, oldest first.
///
/// The registry never touches the board itself; the ruleset clears the
/// square of whatever [`StoneRegistry::push`] returns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoneRegistry {
    x: VecDeque<Position>,
    o: VecDeque<Position>,
}

impl StoneRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn queue(&self, player: Player) -> &VecDeque<Position> {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    fn queue_mut(&mut self, player: Player) -> &mut VecDeque<Position> {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }

    /// Stones held by `player`, oldest first.
    pub fn stones(&self, player: Player) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.queue(player).iter().copied()
    }

    /// Number of stones held by `player`.
    pub fn len(&self, player: Player) -> usize {
        self.queue(player).len()
    }

    /// True when neither player holds a stone.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// The stone `player` would lose on their next placement.
    pub fn next_eviction(&self, player: Player) -> Option<Position> {
        let queue = self.queue(player);
        if queue.len() >= MAX_STONES {
            queue.front().copied()
        } else {
            None
        }
    }

    /// Records a placement, evicting the oldest stone first when full.
    ///
    /// Returns the evicted position so the caller can clear it.
    #[instrument(skip(self))]
    pub fn push(&mut self, player: Player, pos: Position) -> Option<Position> {
        let queue = self.queue_mut(player);
        let evicted = if queue.len() >= MAX_STONES {
            queue.pop_front()
        } else {
            None
        };
        queue.push_back(pos);
        if let Some(old) = evicted {
            debug!(?player, evicted = ?old, placed = ?pos, "Evicted oldest stone");
        }
        evicted
    }

    /// Forgets every stone of both players.
    pub fn clear(&mut self) {
        self.x.clear();
        self.o.clear();
    }
}
