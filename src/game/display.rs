//! Derived, read-only presentation values.
//!
//! None of these are stored on the session; they are recomputed from it
//! whenever the presentation layer asks.

use crate::core::Phase;
use crate::game::content::{chapter_index, JOKE_STREAK, STORY_CHAPTERS};
use crate::game::modes::{GameMode, OperationMode};
use crate::game::session::{Feedback, Session, SessionId};
use serde::Serialize;

/// Story text for the chapter the score has reached. Only meaningful in
/// story mode.
pub fn story_chapter(session: &Session) -> &'static str {
    STORY_CHAPTERS[chapter_index(session.score())]
}

/// Raw score in story mode, `score/attempts` otherwise.
///
/// Before the first attempt this reads `0/0`.
pub fn score_display(session: &Session) -> String {
    match session.game_mode() {
        GameMode::Story => session.score().to_string(),
        _ => format!("{}/{}", session.score(), session.problems_solved()),
    }
}

/// Progress toward the next joke (`1 / 3`) while a joke-mode streak is short,
/// the raw streak otherwise.
pub fn streak_display(session: &Session) -> String {
    if session.game_mode() == GameMode::Joke && session.streak() < JOKE_STREAK {
        format!("{} / {}", session.streak(), JOKE_STREAK)
    } else {
        session.streak().to_string()
    }
}

/// Everything the presentation layer may read, in one serializable value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub session: SessionId,
    pub prompt: String,
    pub expected_answer: i32,
    pub feedback: Option<Feedback>,
    pub unlocked_joke: Option<&'static str>,
    pub score: u32,
    pub problems_solved: u32,
    pub streak: u32,
    pub game_mode: GameMode,
    pub operation_mode: OperationMode,
    pub phase: Phase,
    /// Present only in story mode.
    pub story_chapter: Option<&'static str>,
    pub score_display: String,
    pub streak_display: String,
}

impl Snapshot {
    pub fn of(session: &Session) -> Self {
        Self {
            session: session.id(),
            prompt: session.problem().prompt(),
            expected_answer: session.problem().answer(),
            feedback: session.feedback().cloned(),
            unlocked_joke: session.unlocked_joke(),
            score: session.score(),
            problems_solved: session.problems_solved(),
            streak: session.streak(),
            game_mode: session.game_mode(),
            operation_mode: session.operation_mode(),
            phase: session.phase(),
            story_chapter: (session.game_mode() == GameMode::Story)
                .then(|| story_chapter(session)),
            score_display: score_display(session),
            streak_display: streak_display(session),
        }
    }
}

impl Session {
    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }
}
