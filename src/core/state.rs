//! The `State` trait implemented by game phases.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A phase of the practice loop.
///
/// Phases are plain values: they are copied into the transition history,
/// compared by guards and serialized into snapshots. They carry no counters;
/// those live on the session.
///
/// # Example
///
/// ```rust
/// use math_quest::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Flashcard {
///     Front,
///     Back,
/// }
///
/// impl State for Flashcard {
///     fn name(&self) -> &str {
///         match self {
///             Self::Front => "Front",
///             Self::Back => "Back",
///         }
///     }
///
///     fn accepts_answer(&self) -> bool {
///         matches!(self, Self::Front)
///     }
/// }
///
/// assert!(Flashcard::Front.accepts_answer());
/// assert!(!Flashcard::Back.accepts_answer());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in log events and error messages.
    fn name(&self) -> &str;

    /// Whether a submitted answer may be evaluated in this phase.
    fn accepts_answer(&self) -> bool {
        false
    }
}
