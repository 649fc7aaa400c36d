//! Game rules: modes, problem generation, answer evaluation and unlocks.
//!
//! [`Session`] is the pure core. It takes a [`RandomSource`](crate::random::RandomSource)
//! for every draw and never touches I/O, so any presentation layer can
//! drive it directly or through the effect machine in [`crate::effects`].

pub mod content;
mod display;
mod modes;
mod problem;
mod session;

pub use display::{score_display, story_chapter, streak_display, Snapshot};
pub use modes::{GameMode, Operation, OperationMode, ParseModeError};
pub use problem::{Problem, ADDITION_OPERANDS, SUBTRACTION_MINUEND};
pub use session::{Evaluation, Feedback, FeedbackKind, Session, SessionId};
