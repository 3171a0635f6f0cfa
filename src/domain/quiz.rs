//! The dating statistics true/false quiz
//!
//! Statements come from a fixed, authored table; nothing here is derived from the live
//! population. A game draws statements with replacement and tallies answers for a fixed
//! number of rounds.

pub mod category;
pub mod game;
pub mod selector;
pub mod statements;

pub use category::StatementCategory;
pub use game::{CategoryTally, GamePhase, GameSnapshot, SwipeDirection, SwipeGame, SwipeOutcome};
pub use selector::{pick, pick_index};
pub use statements::{GameStatement, StatementBank};

use crate::domain::types::Percentage;

/// Share of correct answers, rounded half up; `None` before anything was answered
pub fn accuracy_percent(correct: usize, total: usize) -> Option<Percentage> {
    Percentage::of(correct, total)
}
