//! Effectful shell around the pure game core.
//!
//! Intents coming from the presentation layer are matched against a table of
//! guarded transitions and executed as Stillwater effects. The environment
//! supplies the random source, so the same machine runs with a seeded
//! generator in the binary and a fixed script in tests.
//!
//! # Zero-Cost Abstractions
//!
//! Following Stillwater 0.11.0 conventions:
//! - `step` returns `impl Effect`; callers run it and pass the output to `apply_result`
//! - Guards are checked before any effect is built
//! - Free-standing constructors `fail()` and `from_fn()` build the effects

mod env;
mod machine;
mod summary;
mod transition;

pub use env::GameEnv;
pub use machine::{GameMachine, Step, StepResult};
pub use summary::Summary;
pub use transition::{
    game_transitions, Intent, Transition, TransitionAction, TransitionError, TransitionResult,
};
