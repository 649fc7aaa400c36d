//! Phase transition history.
//!
//! Provides immutable tracking of the phase changes a session went through,
//! following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase transition.
///
/// # Example
///
/// ```rust
/// use math_quest::core::{Phase, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::AwaitingAnswer,
///     to: Phase::ShowingFeedback,
///     timestamp: Utc::now(),
///     trigger: "Submit".to_string(),
/// };
/// assert_eq!(transition.trigger, "Submit");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// Name of the intent that caused it
    pub trigger: String,
}

/// Ordered history of phase transitions.
///
/// History is immutable: `record` returns a new history with the transition
/// appended and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use math_quest::core::{Phase, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::AwaitingAnswer,
///         to: Phase::ShowingFeedback,
///         timestamp: Utc::now(),
///         trigger: "Submit".to_string(),
///     })
///     .record(StateTransition {
///         from: Phase::ShowingFeedback,
///         to: Phase::AwaitingAnswer,
///         timestamp: Utc::now(),
///         trigger: "Next".to_string(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &Phase::AwaitingAnswer);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases traversed, in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Count transitions that entered `phase` from a different phase.
    ///
    /// Self-loops (an intent that left the phase unchanged) are not entries.
    pub fn entries_into(&self, phase: &S) -> usize {
        self.transitions
            .iter()
            .filter(|t| &t.to == phase && &t.from != phase)
            .count()
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
