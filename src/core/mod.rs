//! Core state machine types.
//!
//! This module contains the pure functional core shared by the game:
//! - Phase definitions via the `State` trait
//! - Guard predicates for transition control
//! - Immutable phase history
//!
//! Nothing in here performs I/O or draws random numbers.

mod guard;
mod history;
mod macros;
mod phase;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use phase::Phase;
pub use state::State;
