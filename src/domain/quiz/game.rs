//! Game loop of the statistics quiz
//!
//! ```text
//! AwaitingAnswer --swipe--> ShowingExplanation --next--> AwaitingAnswer
//! AwaitingAnswer --swipe (last round)--> GameOver
//! any phase --reset--> AwaitingAnswer
//! ```

use super::{accuracy_percent, pick_index, GameStatement, StatementBank, StatementCategory};
use crate::domain::config_types::RoundCount;
use crate::domain::types::Percentage;
use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    AwaitingAnswer,
    ShowingExplanation,
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::AwaitingAnswer => "awaiting an answer",
            GamePhase::ShowingExplanation => "showing an explanation",
            GamePhase::GameOver => "the game is over",
        };
        write!(f, "{name}")
    }
}

/// Right means "true", left means "false"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn answers_true(self) -> bool {
        self == SwipeDirection::Right
    }
}

/// What the player learns after answering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwipeOutcome {
    pub correct: bool,
    pub is_true: bool,
    pub explanation: String,
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub category: StatementCategory,
    pub answered: u32,
    pub correct: u32,
}

/// Serializable view of a game in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    /// 1-based round being played, or the last round once the game is over
    pub round: u8,
    pub rounds: RoundCount,
    pub answered: u8,
    pub score: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub accuracy: Option<Percentage>,
    pub categories: Vec<CategoryTally>,
}

pub struct SwipeGame<R> {
    bank: Arc<StatementBank>,
    rng: R,
    rounds: RoundCount,
    phase: GamePhase,
    current: usize,
    answered: u8,
    score: u32,
    streak: u32,
    max_streak: u32,
    tallies: [CategoryTally; StatementCategory::COUNT],
}

impl<R: Rng> SwipeGame<R> {
    pub fn new(bank: Arc<StatementBank>, rounds: RoundCount, rng: R) -> Result<Self> {
        if bank.is_empty() {
            return Err(Error::EmptyStatementTable);
        }
        let mut game = Self {
            bank,
            rng,
            rounds,
            phase: GamePhase::AwaitingAnswer,
            current: 0,
            answered: 0,
            score: 0,
            streak: 0,
            max_streak: 0,
            tallies: fresh_tallies(),
        };
        game.draw()?;
        Ok(game)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The statement on screen; stays on the last one once the game is over
    pub fn current_statement(&self) -> &GameStatement {
        &self.bank.statements()[self.current]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome> {
        if self.phase != GamePhase::AwaitingAnswer {
            return Err(self.invalid("answer"));
        }

        let statement = &self.bank.statements()[self.current];
        let correct = direction.answers_true() == statement.is_true;
        let tally = &mut self.tallies[statement.category.index()];
        tally.answered += 1;
        if correct {
            tally.correct += 1;
            self.score += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        self.answered += 1;
        self.phase = if self.answered >= self.rounds.into_inner() {
            GamePhase::GameOver
        } else {
            GamePhase::ShowingExplanation
        };

        Ok(SwipeOutcome {
            correct,
            is_true: statement.is_true,
            explanation: statement.explanation.clone(),
            game_over: self.phase == GamePhase::GameOver,
        })
    }

    /// Dismisses the explanation and draws the next statement
    pub fn next(&mut self) -> Result<&GameStatement> {
        if self.phase != GamePhase::ShowingExplanation {
            return Err(self.invalid("advance"));
        }
        self.draw()?;
        self.phase = GamePhase::AwaitingAnswer;
        Ok(self.current_statement())
    }

    /// Starts over from any phase, zeroing score, streaks and tallies
    pub fn reset(&mut self) -> Result<&GameStatement> {
        self.answered = 0;
        self.score = 0;
        self.streak = 0;
        self.max_streak = 0;
        self.tallies = fresh_tallies();
        self.draw()?;
        self.phase = GamePhase::AwaitingAnswer;
        Ok(self.current_statement())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let rounds = self.rounds.into_inner();
        GameSnapshot {
            phase: self.phase,
            round: (self.answered + 1).min(rounds),
            rounds: self.rounds,
            answered: self.answered,
            score: self.score,
            streak: self.streak,
            max_streak: self.max_streak,
            accuracy: accuracy_percent(self.score as usize, self.answered as usize),
            categories: self.tallies.to_vec(),
        }
    }

    fn draw(&mut self) -> Result<()> {
        self.current = pick_index(self.bank.statements(), &mut self.rng)?;
        Ok(())
    }

    fn invalid(&self, action: &str) -> Error {
        Error::InvalidStateTransition(format!("Cannot {action} while {}", self.phase))
    }
}

fn fresh_tallies() -> [CategoryTally; StatementCategory::COUNT] {
    StatementCategory::ALL.map(|category| CategoryTally {
        category,
        answered: 0,
        correct: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn new_game(rounds: u8) -> SwipeGame<StdRng> {
        SwipeGame::new(
            Arc::new(StatementBank::built_in()),
            RoundCount::try_new(rounds).unwrap(),
            StdRng::seed_from_u64(2024),
        )
        .unwrap()
    }

    fn correct_direction(game: &SwipeGame<StdRng>) -> SwipeDirection {
        if game.current_statement().is_true {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    }

    fn wrong_direction(game: &SwipeGame<StdRng>) -> SwipeDirection {
        match correct_direction(game) {
            SwipeDirection::Right => SwipeDirection::Left,
            SwipeDirection::Left => SwipeDirection::Right,
        }
    }

    #[test]
    fn test_ten_correct_answers_end_the_game() {
        let mut game = new_game(10);
        for round in 1..=10 {
            let outcome = game.swipe(correct_direction(&game)).unwrap();
            assert!(outcome.correct);
            if round < 10 {
                assert_eq!(game.phase(), GamePhase::ShowingExplanation);
                game.next().unwrap();
                assert_eq!(game.phase(), GamePhase::AwaitingAnswer);
            } else {
                assert!(outcome.game_over);
            }
        }
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.score(), 10);
        assert_eq!(game.streak(), 10);
        assert_eq!(game.max_streak(), 10);
    }

    #[test]
    fn test_wrong_answer_resets_streak_but_keeps_score_and_max() {
        let mut game = new_game(10);
        for _ in 0..3 {
            game.swipe(correct_direction(&game)).unwrap();
            game.next().unwrap();
        }
        let outcome = game.swipe(wrong_direction(&game)).unwrap();
        assert!(!outcome.correct);
        assert_eq!(game.score(), 3);
        assert_eq!(game.streak(), 0);
        assert_eq!(game.max_streak(), 3);
    }

    #[test]
    fn test_out_of_order_actions_are_rejected() {
        let mut game = new_game(1);
        assert!(matches!(
            game.next(),
            Err(Error::InvalidStateTransition(_))
        ));
        game.swipe(SwipeDirection::Right).unwrap();
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(matches!(
            game.swipe(SwipeDirection::Left),
            Err(Error::InvalidStateTransition(_))
        ));
        assert!(matches!(
            game.next(),
            Err(Error::InvalidStateTransition(_))
        ));
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut game = new_game(2);
        game.swipe(correct_direction(&game)).unwrap();
        game.next().unwrap();
        game.swipe(correct_direction(&game)).unwrap();
        assert_eq!(game.phase(), GamePhase::GameOver);

        game.reset().unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.phase, GamePhase::AwaitingAnswer);
        assert_eq!(snapshot.round, 1);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.streak, 0);
        assert_eq!(snapshot.max_streak, 0);
        assert_eq!(snapshot.accuracy, None);
        assert!(snapshot.categories.iter().all(|t| t.answered == 0));
    }

    #[test]
    fn test_snapshot_tallies_by_category() {
        let mut game = new_game(10);
        let category = game.current_statement().category;
        game.swipe(correct_direction(&game)).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.answered, 1);
        assert_eq!(snapshot.round, 2);
        assert_eq!(snapshot.accuracy.map(|p| p.into_inner()), Some(100));
        let tally = snapshot
            .categories
            .iter()
            .find(|t| t.category == category)
            .unwrap();
        assert_eq!((tally.answered, tally.correct), (1, 1));
        assert_eq!(
            snapshot.categories.iter().map(|t| t.answered).sum::<u32>(),
            1
        );
    }
}
