//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} action {Q(before, after)}.

use super::action::IllegalMove;
use super::game::Game;
use super::invariants::{InvariantSet, InvariantViolation};
use super::position::Position;
use super::ruleset::Ruleset;
use super::types::Square;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the round has not concluded.
pub struct RoundActive;

impl RoundActive {
    /// Rejects any move once the round is won or drawn.
    pub fn check<R: Ruleset>(game: &Game<R>) -> Result<(), IllegalMove> {
        if game.state().is_terminal() {
            Err(IllegalMove::RoundOver(game.state()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the destination square is empty.
///
/// Holds in both variants; eviction never frees the destination.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto any stone, own or opponent's.
    pub fn check<R: Ruleset>(pos: Position, game: &Game<R>) -> Result<(), IllegalMove> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(IllegalMove::SquareOccupied(pos))
        }
    }
}

/// Contract for placing a stone.
///
/// Preconditions:
/// - Round is still in progress
/// - Destination square is empty
///
/// Postconditions:
/// - The ruleset's invariant set holds
/// - Exactly one square gained the mover's stone; at most one other square
///   (the mover's evicted stone) was cleared
/// - The score total grew by one exactly when the round concluded
pub struct MoveContract;

impl<R: Ruleset> Contract<Game<R>, Position> for MoveContract {
    #[instrument(skip(game))]
    fn pre(game: &Game<R>, pos: &Position) -> Result<(), IllegalMove> {
        RoundActive::check(game)?;
        SquareIsEmpty::check(*pos, game)
    }

    fn post(before: &Game<R>, after: &Game<R>) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match R::Invariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let mover = before.to_move();
        let mut placed = 0;
        let mut cleared = 0;
        for (old, new) in before.board().squares().iter().zip(after.board().squares()) {
            match (old, new) {
                (Square::Empty, Square::Occupied(p)) if *p == mover => placed += 1,
                (Square::Occupied(p), Square::Empty) if *p == mover => cleared += 1,
                (old, new) if old == new => {}
                _ => cleared += 2,
            }
        }
        if placed != 1 || cleared > 1 {
            violations.push(InvariantViolation::new(
                "A move writes one stone and clears at most one of the mover's stones",
            ));
        }

        let total = |g: &Game<R>| {
            let (x, o, d) = g.scores().as_tuple();
            x + o + d
        };
        let concluded = after.state().is_terminal();
        if total(after) != total(before) + u32::from(concluded) {
            violations.push(InvariantViolation::new(
                "Scores grow by one exactly when a round concludes",
            ));
        }

        if !concluded && after.to_move() != mover.opponent() {
            violations.push(InvariantViolation::new("Turn passes to the opponent"));
        }
        if concluded && after.to_move() != mover {
            violations.push(InvariantViolation::new(
                "Turn does not pass once the round concludes",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
