//! Shell state: the engine plus cursor and transient messages.

use crate::input::{Action, Direction, move_cursor};
use tictactoe_core::{Game, MoveOutcome, Position, RoundState, Ruleset};
use tracing::{debug, info, instrument};

/// Everything the shell keeps between key presses.
///
/// The engine is the only source of game state; the app adds the cursor
/// and a one-shot note about the last action.
#[derive(Debug)]
pub struct App<R> {
    game: Game<R>,
    cursor: Position,
    note: Option<String>,
    running: bool,
}

impl<R: Ruleset> App<R> {
    /// Creates an app with a fresh session and the cursor on the center.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            note: None,
            running: true,
        }
    }

    /// The engine.
    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Message about the previous action, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        self.note = None;
        match action {
            Action::MoveCursor(direction) => self.move_cursor(direction),
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::NewRound => self.game.new_round(),
            Action::ResetScores => self.game.reset_scores(),
            Action::Quit => {
                info!("Quit requested");
                self.running = false;
            }
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        self.cursor = move_cursor(self.cursor, direction);
    }

    fn place(&mut self, pos: Position) {
        match self.game.attempt_move_at(pos) {
            Ok(outcome) => self.note = eviction_note(&outcome),
            Err(e) => {
                // Illegal input is ignored apart from a short hint.
                debug!(%e, "Ignoring illegal move");
                self.note = Some(e.to_string());
            }
        }
    }

    /// Headline for the status bar.
    pub fn status_line(&self) -> String {
        match self.game.state() {
            RoundState::InProgress => format!("{} to move", self.game.to_move()),
            RoundState::Won(player) => format!("{} wins! Press N for a new round", player),
            RoundState::Draw => "Draw! Press N for a new round".to_string(),
        }
    }

    /// Session scores for the score bar.
    pub fn score_line(&self) -> String {
        self.game.scores().to_string()
    }
}

impl<R: Ruleset> Default for App<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn eviction_note(outcome: &MoveOutcome) -> Option<String> {
    (*outcome.evicted()).map(|pos| {
        format!(
            "{}'s oldest stone at {} was removed",
            outcome.placed().player,
            pos.label()
        )
    })
}
