//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions that decide whether an intent may run
//! against the current session. They keep the rules declarative and free of
//! side effects.

use std::fmt;

/// Pure predicate that determines if a transition can execute.
///
/// A guard is evaluated against a read-only view of the machine (usually the
/// whole session) before any effect runs. The `reason` is reported when the
/// guard blocks.
///
/// # Example
///
/// ```rust
/// use math_quest::core::{Guard, Phase};
///
/// let only_awaiting = Guard::new("an answer was already checked", |p: &Phase| {
///     *p == Phase::AwaitingAnswer
/// });
///
/// assert!(only_awaiting.check(&Phase::AwaitingAnswer));
/// assert!(!only_awaiting.check(&Phase::ShowingFeedback));
/// assert_eq!(only_awaiting.reason(), "an answer was already checked");
/// ```
pub struct Guard<T: ?Sized> {
    reason: &'static str,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(reason: &'static str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            reason,
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, target: &T) -> bool {
        (self.predicate)(target)
    }

    /// Why the guard blocks, for error messages.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl<T: ?Sized> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("reason", &self.reason).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[test]
    fn guard_allows_matching_phases() {
        let guard = Guard::new("busy", |p: &Phase| matches!(p, Phase::ShowingFeedback));

        assert!(guard.check(&Phase::ShowingFeedback));
        assert!(!guard.check(&Phase::AwaitingAnswer));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new("odd", |n: &u32| n % 2 == 0);
        assert_eq!(guard.check(&4), guard.check(&4));
        assert!(!guard.check(&3));
    }

    #[test]
    fn debug_shows_reason() {
        let guard = Guard::new("needs feedback", |_: &Phase| false);
        assert!(format!("{guard:?}").contains("needs feedback"));
    }
}
