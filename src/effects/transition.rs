//! Intents and the guarded transitions that handle them.

use crate::core::{Guard, State};
use crate::game::{Evaluation, GameMode, OperationMode, Session};
use crate::random::RandomSource;

/// A user action forwarded by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    SetGameMode(GameMode),
    SetOperationMode(OperationMode),
    Submit(Option<i32>),
    Next,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetGameMode(_) => "SetGameMode",
            Self::SetOperationMode(_) => "SetOperationMode",
            Self::Submit(_) => "Submit",
            Self::Next => "Next",
        }
    }

    fn same_kind(&self, other: &Intent) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Result of running a transition action.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionResult {
    /// The session moved on; `evaluation` is set for counted submissions.
    Success { evaluation: Option<Evaluation> },

    /// Nothing was counted; the player should try again.
    Retry { feedback: String },
}

/// Errors that can occur during transitions
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition handles intent '{intent}'")]
    NoTransition { intent: &'static str },

    #[error("{intent} blocked while {phase}: {reason}")]
    GuardBlocked {
        intent: &'static str,
        phase: String,
        reason: &'static str,
    },

    #[error("Transition action failed: {0}")]
    ActionFailed(String),
}

/// Pure state update run inside the effect, with randomness from the environment.
pub type TransitionAction =
    fn(&mut Session, Intent, &mut dyn RandomSource) -> Result<TransitionResult, TransitionError>;

/// Handler for one kind of intent.
pub struct Transition {
    /// Any intent of the same variant; the payload is ignored.
    pub handles: Intent,
    pub guard: Option<Guard<Session>>,
    pub action: TransitionAction,
}

impl Transition {
    /// Check if this transition may run for `intent` against `session` (pure).
    pub fn can_execute(&self, session: &Session, intent: &Intent) -> bool {
        self.handles.same_kind(intent) && self.guard.as_ref().is_none_or(|g| g.check(session))
    }

    pub fn handles(&self, intent: &Intent) -> bool {
        self.handles.same_kind(intent)
    }
}

fn mismatch(intent: Intent) -> TransitionError {
    TransitionError::ActionFailed(format!("unexpected intent {intent:?}"))
}

fn set_game_mode(
    session: &mut Session,
    intent: Intent,
    _rng: &mut dyn RandomSource,
) -> Result<TransitionResult, TransitionError> {
    let Intent::SetGameMode(mode) = intent else {
        return Err(mismatch(intent));
    };
    session.set_game_mode(mode);
    Ok(TransitionResult::Success { evaluation: None })
}

fn set_operation_mode(
    session: &mut Session,
    intent: Intent,
    rng: &mut dyn RandomSource,
) -> Result<TransitionResult, TransitionError> {
    let Intent::SetOperationMode(mode) = intent else {
        return Err(mismatch(intent));
    };
    session.set_operation_mode(mode, rng);
    Ok(TransitionResult::Success { evaluation: None })
}

fn submit(
    session: &mut Session,
    intent: Intent,
    rng: &mut dyn RandomSource,
) -> Result<TransitionResult, TransitionError> {
    let Intent::Submit(answer) = intent else {
        return Err(mismatch(intent));
    };
    match session.submit_answer(answer, rng) {
        Evaluation::Missing => Ok(TransitionResult::Retry {
            feedback: session
                .feedback()
                .map(|f| f.message.clone())
                .unwrap_or_default(),
        }),
        evaluation => Ok(TransitionResult::Success {
            evaluation: Some(evaluation),
        }),
    }
}

fn next(
    session: &mut Session,
    intent: Intent,
    rng: &mut dyn RandomSource,
) -> Result<TransitionResult, TransitionError> {
    if intent != Intent::Next {
        return Err(mismatch(intent));
    }
    session.generate_problem(rng);
    Ok(TransitionResult::Success { evaluation: None })
}

/// The game's transition table.
///
/// Mode switches are always allowed. A submission is only evaluated once per
/// problem, and moving on requires feedback to be showing.
pub fn game_transitions() -> Vec<Transition> {
    vec![
        Transition {
            handles: Intent::SetGameMode(GameMode::Story),
            guard: None,
            action: set_game_mode,
        },
        Transition {
            handles: Intent::SetOperationMode(OperationMode::Addition),
            guard: None,
            action: set_operation_mode,
        },
        Transition {
            handles: Intent::Submit(None),
            guard: Some(Guard::new(
                "this answer was already checked, move on to the next problem",
                |s: &Session| s.phase().accepts_answer(),
            )),
            action: submit,
        },
        Transition {
            handles: Intent::Next,
            guard: Some(Guard::new(
                "there is no feedback to move past yet",
                |s: &Session| s.feedback().is_some(),
            )),
            action: next,
        },
    ]
}
