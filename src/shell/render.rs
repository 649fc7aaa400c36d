//! Plain-text rendering of snapshots.

use crate::effects::{StepResult, TransitionError};
use crate::game::{FeedbackKind, GameMode, Snapshot};
use std::fmt;

pub const HELP: &str = "\
Type your answer and press Enter. An empty line submits nothing.
  n, next              next question (after feedback)
  story, joke, practice  switch game mode
  add, sub, mixed      switch operation (starts a new question)
  help                 show this help
  q, quit              leave and print a summary";

/// Text screen for one snapshot.
struct Screen<'a>(&'a Snapshot);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = self.0;
        writeln!(f, "[{} | {}]", snap.game_mode, snap.operation_mode)?;
        if let Some(chapter) = snap.story_chapter {
            writeln!(f, "Story: {chapter}")?;
        }
        writeln!(f, "\n    {}\n", snap.prompt)?;

        if let Some(feedback) = &snap.feedback {
            let mark = match feedback.kind {
                FeedbackKind::Success => "✅",
                FeedbackKind::Error => "❌",
            };
            writeln!(f, "{mark} {}", feedback.message)?;
            if let Some(joke) = snap.unlocked_joke {
                writeln!(f, "Joke Unlocked! {joke}")?;
            }
            writeln!(f, "(type 'n' for the next question)")?;
        }

        let score_label = match snap.game_mode {
            GameMode::Story => "💎 Score",
            _ => "🏆 Score",
        };
        write!(
            f,
            "{score_label}: {}   🔥 Streak: {}",
            snap.score_display, snap.streak_display
        )
    }
}

/// Render the screen for one snapshot.
pub fn render_snapshot(snap: &Snapshot) -> String {
    Screen(snap).to_string()
}

/// One-line note for outcomes the snapshot does not already show.
pub fn render_error(err: &TransitionError) -> String {
    match err {
        TransitionError::GuardBlocked { reason, .. } => format!("Can't do that now: {reason}."),
        other => format!("Something went wrong: {other}"),
    }
}

/// Extra line after a step, if any.
pub fn render_step(result: &StepResult) -> Option<String> {
    match result {
        StepResult::Retry { attempts, .. } if *attempts > 1 => {
            Some(format!("(still waiting for an answer, try {attempts})"))
        }
        _ => None,
    }
}
