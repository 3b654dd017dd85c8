//! Moves, move results, and the illegal-move error.

use super::phases::RoundState;
use super::position::Position;
use super::rules::WinningLine;
use super::score::Scores;
use super::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// A rejected move. Nothing changed; the caller can ignore the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Coordinates outside the 3x3 board.
    #[display("({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The destination square already holds a stone.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),

    /// The round has concluded; start a new one first.
    #[display("Round is over ({_0})")]
    RoundOver(RoundState),
}

impl std::error::Error for IllegalMove {}

/// Everything an accepted move changed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The stone that was written.
    placed: Move,
    /// The square cleared by a three-stone eviction, if any.
    evicted: Option<Position>,
    /// Round state after the move.
    state: RoundState,
    /// The line that decided the round, if it was won.
    winning_line: Option<WinningLine>,
    /// Scores after the move.
    scores: Scores,
    /// Player to move next (unchanged when the round concluded).
    to_move: Player,
}

impl MoveOutcome {
    pub(crate) fn new(
        placed: Move,
        evicted: Option<Position>,
        state: RoundState,
        winning_line: Option<WinningLine>,
        scores: Scores,
        to_move: Player,
    ) -> Self {
        Self {
            placed,
            evicted,
            state,
            winning_line,
            scores,
            to_move,
        }
    }

    /// Winner of the round, if this move won it.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// True if this move ended the round in a draw.
    pub fn is_draw(&self) -> bool {
        self.state == RoundState::Draw
    }
}
