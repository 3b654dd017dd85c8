//! Placement policies for the two game variants.
//!
//! Both variants share validation, win detection, draw detection and
//! scoring; they differ only in what happens to the board when a stone
//! is placed.

use super::action::Move;
use super::game::Game;
use super::invariants::{
    InvariantSet, MarkBalanceInvariant, RegistryConsistentInvariant, StoneLimitInvariant,
    TurnParityInvariant,
};
use super::position::Position;
use super::registry::StoneRegistry;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Classic {}
    impl Sealed for super::ThreeStone {}
}

/// Which ruleset a game is played under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Variant {
    /// Plain tic-tac-toe.
    #[default]
    Classic,
    /// At most three stones per player; the oldest one makes way.
    ThreeStone,
}

/// Placement policy of a game variant.
///
/// Sealed: the board may only be written through the rulesets in this
/// crate.
pub trait Ruleset: sealed::Sealed + std::fmt::Debug + Clone + Default {
    /// The variant this ruleset implements.
    const VARIANT: Variant;

    /// Invariants that hold after every accepted move under this ruleset.
    type Invariants: InvariantSet<Game<Self>>;

    /// Writes `mv` onto `board`, first clearing any stone the rule evicts.
    ///
    /// The destination is already known to be empty. Returns the evicted
    /// position, if any.
    fn place(&mut self, board: &mut Board, mv: Move) -> Option<Position>;

    /// Stones `player` holds in placement order, oldest first.
    ///
    /// Empty for rulesets that do not track placement order.
    fn stones(&self, player: Player) -> Vec<Position>;

    /// The stone `player` would lose on their next placement.
    fn next_eviction(&self, player: Player) -> Option<Position>;

    /// Forgets all per-round state.
    fn reset(&mut self);
}

/// Classic tic-tac-toe: stones stay where they are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classic;

impl Ruleset for Classic {
    const VARIANT: Variant = Variant::Classic;

    type Invariants = (MarkBalanceInvariant, TurnParityInvariant);

    fn place(&mut self, board: &mut Board, mv: Move) -> Option<Position> {
        board.set(mv.position, Square::Occupied(mv.player));
        None
    }

    fn stones(&self, _player: Player) -> Vec<Position> {
        Vec::new()
    }

    fn next_eviction(&self, _player: Player) -> Option<Position> {
        None
    }

    fn reset(&mut self) {}
}

/// Three-stone tic-tac-toe: a fourth stone evicts the player's oldest one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThreeStone {
    registry: StoneRegistry,
}

impl ThreeStone {
    /// Placement order of both players' stones.
    pub fn registry(&self) -> &StoneRegistry {
        &self.registry
    }
}

impl Ruleset for ThreeStone {
    const VARIANT: Variant = Variant::ThreeStone;

    type Invariants = (
        MarkBalanceInvariant,
        StoneLimitInvariant,
        RegistryConsistentInvariant,
    );

    #[instrument(skip(self, board))]
    fn place(&mut self, board: &mut Board, mv: Move) -> Option<Position> {
        let evicted = self.registry.push(mv.player, mv.position);
        if let Some(old) = evicted {
            board.set(old, Square::Empty);
        }
        board.set(mv.position, Square::Occupied(mv.player));
        evicted
    }

    fn stones(&self, player: Player) -> Vec<Position> {
        self.registry.stones(player).collect()
    }

    fn next_eviction(&self, player: Player) -> Option<Position> {
        self.registry.next_eviction(player)
    }

    fn reset(&mut self) {
        self.registry.clear();
    }
}
