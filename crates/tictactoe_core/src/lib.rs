//! Tic-tac-toe round engine.
//!
//! Two variants share one engine, [`Game`], parameterized by a
//! [`Ruleset`]:
//!
//! - [`Classic`]: stones stay where they are placed.
//! - [`ThreeStone`]: each player holds at most three stones; placing a
//!   fourth first removes that player's oldest stone.
//!
//! The engine is pure state: a UI shell forwards cell selections to
//! [`Game::attempt_move`] and renders the returned [`MoveOutcome`] or the
//! [`GameSnapshot`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{ClassicGame, Player, RoundState};
//!
//! let mut game = ClassicGame::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2)] {
//!     game.attempt_move(row, col)?;
//! }
//! let outcome = game.attempt_move(0, 2)?;
//! assert_eq!(outcome.winner(), Some(Player::X));
//! assert_eq!(game.state(), RoundState::Won(Player::X));
//! assert_eq!(game.scores().as_tuple(), (1, 0, 0));
//! # Ok::<(), tictactoe_core::IllegalMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod phases;
mod position;
mod registry;
mod ruleset;
mod score;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{IllegalMove, Move, MoveOutcome};
pub use contracts::{Contract, MoveContract, RoundActive, SquareIsEmpty};
pub use game::{ClassicGame, Game, GameSnapshot, ThreeStoneGame};
pub use phases::RoundState;
pub use position::Position;
pub use registry::{MAX_STONES, StoneRegistry};
pub use ruleset::{Classic, Ruleset, ThreeStone, Variant};
pub use rules::WinningLine;
pub use score::Scores;
pub use types::{Board, Player, Square};
