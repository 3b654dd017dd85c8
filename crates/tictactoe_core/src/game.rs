//! Round engine shared by both variants.
//!
//! A [`Game`] owns one session: the board and turn of the current round,
//! the ruleset's per-round state, and the scores that outlive rounds.
//! Every change goes through [`Game::attempt_move`], [`Game::new_round`]
//! or [`Game::reset_scores`].

use super::action::{IllegalMove, Move, MoveOutcome};
use super::contracts::{Contract, MoveContract, RoundActive};
use super::phases::RoundState;
use super::position::Position;
use super::rules::{self, WinningLine};
use super::ruleset::{Classic, Ruleset, ThreeStone, Variant};
use super::score::Scores;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Game session under ruleset `R`.
#[derive(Debug, Clone)]
pub struct Game<R> {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) state: RoundState,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) scores: Scores,
    pub(crate) rules: R,
}

/// Plain tic-tac-toe session.
pub type ClassicGame = Game<Classic>;

/// Three-stone session.
pub type ThreeStoneGame = Game<ThreeStone>;

impl<R: Ruleset> Game<R> {
    /// Creates a session with zeroed scores and a fresh round, X to move.
    #[instrument]
    pub fn new() -> Self {
        info!(variant = %R::VARIANT, "Creating game session");
        Self {
            board: Board::new(),
            to_move: Player::X,
            state: RoundState::InProgress,
            winning_line: None,
            scores: Scores::new(),
            rules: R::default(),
        }
    }

    /// Places the current player's stone at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] without touching any state when the round is
    /// over, the coordinates are off the board, or the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, IllegalMove> {
        RoundActive::check(&*self).inspect_err(|e| debug!(%e, "Move rejected"))?;
        let pos = Position::from_row_col(row, col).ok_or_else(|| {
            debug!(row, col, "Move rejected: off the board");
            IllegalMove::OutOfRange { row, col }
        })?;
        self.attempt_move_at(pos)
    }

    /// Places the current player's stone at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] without touching any state when the round is
    /// over or the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn attempt_move_at(&mut self, pos: Position) -> Result<MoveOutcome, IllegalMove> {
        MoveContract::pre(&*self, &pos).inspect_err(|e| debug!(%e, "Move rejected"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move;
        let placed = Move::new(player, pos);
        // Eviction and placement happen inside one call; nothing observes
        // the board in between.
        let evicted = self.rules.place(&mut self.board, placed);
        debug!(%placed, ?evicted, "Stone placed");

        self.winning_line = rules::winning_line(&self.board);
        if let Some(line) = self.winning_line {
            self.state = RoundState::Won(line.player);
            self.scores.record_win(line.player);
            info!(winner = %line.player, line = ?line.cells, "Round won");
        } else if rules::is_full(&self.board) {
            self.state = RoundState::Draw;
            self.scores.record_draw();
            info!("Round drawn");
        } else {
            self.to_move = player.opponent();
        }

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, &*self);
            debug_assert!(checked.is_ok(), "Postcondition failed: {:?}", checked);
        }

        Ok(MoveOutcome::new(
            placed,
            evicted,
            self.state,
            self.winning_line,
            self.scores,
            self.to_move,
        ))
    }

    /// Clears the board and per-round state; X moves first. Scores stay.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.state = RoundState::InProgress;
        self.winning_line = None;
        self.rules.reset();
        info!(scores = %self.scores, "New round");
    }

    /// Zeroes all scores and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        info!("Scores reset");
        self.new_round();
    }

    /// The variant this session is played under.
    pub fn variant(&self) -> Variant {
        R::VARIANT
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is, or who made the concluding move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the session scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// The line that decided the round, if it was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// The ruleset and its per-round state.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Stones `player` holds in placement order; empty in classic play.
    pub fn stones(&self, player: Player) -> Vec<Position> {
        self.rules.stones(player)
    }

    /// The stone the current player would lose by moving now.
    pub fn next_eviction(&self) -> Option<Position> {
        if self.state.is_terminal() {
            None
        } else {
            self.rules.next_eviction(self.to_move)
        }
    }

    /// Returns valid destinations for the current player.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Copies everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            variant: R::VARIANT,
            board: self.board.clone(),
            to_move: self.to_move,
            state: self.state,
            winning_line: self.winning_line,
            scores: self.scores,
            x_stones: self.stones(Player::X),
            o_stones: self.stones(Player::O),
            next_eviction: self.next_eviction(),
        }
    }
}

impl<R: Ruleset> Default for Game<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a session, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Ruleset in play.
    pub variant: Variant,
    /// Board of the current round.
    pub board: Board,
    /// Player to move (or who concluded the round).
    pub to_move: Player,
    /// Round state.
    pub state: RoundState,
    /// Deciding line, if the round was won.
    pub winning_line: Option<WinningLine>,
    /// Session scores.
    pub scores: Scores,
    /// X's stones, oldest first (three-stone only).
    pub x_stones: Vec<Position>,
    /// O's stones, oldest first (three-stone only).
    pub o_stones: Vec<Position>,
    /// Stone the current player would lose by moving now.
    pub next_eviction: Option<Position>,
}
