//! The per-player session and its two core operations.

use crate::core::Phase;
use crate::game::content::{self, JOKES, JOKE_STREAK, PRAISE};
use crate::game::modes::{GameMode, OperationMode};
use crate::game::problem::Problem;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

/// Unique identifier for a Session
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random `SessionId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Message shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    fn success(message: &str) -> Self {
        Self {
            message: message.to_string(),
            kind: FeedbackKind::Success,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}

/// What `submit_answer` decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// No answer was given; nothing was counted.
    Missing,
    Correct { joke_unlocked: bool },
    Incorrect { expected: i32 },
}

impl Evaluation {
    /// Whether the submission counted as an attempt.
    pub fn counted(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// Complete mutable game state for one player's run.
///
/// A session always holds exactly one current problem. It is owned by
/// whoever drives the game and never shared between players.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    score: u32,
    problems_solved: u32,
    streak: u32,
    best_streak: u32,
    game_mode: GameMode,
    operation_mode: OperationMode,
    problem: Problem,
    feedback: Option<Feedback>,
    unlocked_joke: Option<&'static str>,
    phase: Phase,
}

impl Session {
    /// Fresh session in story mode with addition problems.
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        Self::with_modes(GameMode::default(), OperationMode::default(), rng)
    }

    /// Fresh session with the given starting modes. The first problem is
    /// generated immediately.
    pub fn with_modes(
        game_mode: GameMode,
        operation_mode: OperationMode,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let id = SessionId::new();
        let problem = Problem::generate(operation_mode, rng);
        debug!(session = %id, %game_mode, %operation_mode, "session started");
        Self {
            id,
            score: 0,
            problems_solved: 0,
            streak: 0,
            best_streak: 0,
            game_mode,
            operation_mode,
            problem,
            feedback: None,
            unlocked_joke: None,
            phase: Phase::AwaitingAnswer,
        }
    }

    /// Replace the current problem and clear feedback and any unlocked joke.
    pub fn generate_problem(&mut self, rng: &mut dyn RandomSource) {
        self.problem = Problem::generate(self.operation_mode, rng);
        self.feedback = None;
        self.unlocked_joke = None;
        self.phase = Phase::AwaitingAnswer;
        debug!(session = %self.id, problem = %self.problem.prompt(), "new problem");
    }

    /// Evaluate an answer against the current problem.
    ///
    /// Never advances to the next problem; the feedback stays until the
    /// caller asks for one.
    pub fn submit_answer(
        &mut self,
        answer: Option<i32>,
        rng: &mut dyn RandomSource,
    ) -> Evaluation {
        let Some(answer) = answer else {
            self.feedback = Some(Feedback::error(content::MISSING_ANSWER));
            return Evaluation::Missing;
        };

        self.problems_solved += 1;
        self.phase = Phase::ShowingFeedback;

        let expected = self.problem.answer();
        if answer == expected {
            self.score += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            self.feedback = Some(Feedback::success(PRAISE[rng.index(PRAISE.len())]));

            self.unlocked_joke = if self.joke_earned() {
                Some(JOKES[rng.index(JOKES.len())])
            } else {
                None
            };
            if self.unlocked_joke.is_some() {
                info!(session = %self.id, streak = self.streak, "joke unlocked");
            }
            Evaluation::Correct {
                joke_unlocked: self.unlocked_joke.is_some(),
            }
        } else {
            self.streak = 0;
            self.feedback = Some(Feedback::error(content::wrong_answer(expected)));
            self.unlocked_joke = None;
            Evaluation::Incorrect { expected }
        }
    }

    /// Move on to a new problem. Does nothing until feedback is showing.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) -> bool {
        if self.feedback.is_none() {
            return false;
        }
        self.generate_problem(rng);
        true
    }

    /// Switch the cosmetic mode. The current problem is kept.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.game_mode = mode;
    }

    /// Switch the operation mode. Always discards the current problem.
    pub fn set_operation_mode(&mut self, mode: OperationMode, rng: &mut dyn RandomSource) {
        self.operation_mode = mode;
        self.generate_problem(rng);
    }

    fn joke_earned(&self) -> bool {
        self.game_mode == GameMode::Joke && self.streak > 0 && self.streak % JOKE_STREAK == 0
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn problems_solved(&self) -> u32 {
        self.problems_solved
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn operation_mode(&self) -> OperationMode {
        self.operation_mode
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn unlocked_joke(&self) -> Option<&'static str> {
        self.unlocked_joke
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
