//! Math Quest: an arithmetic practice game as a pure functional state machine
//!
//! The game follows a "pure core, imperative shell" layout. The core
//! ([`game`], [`core`]) holds the rules as plain functions over an owned
//! [`Session`](game::Session); every random draw goes through an injectable
//! [`RandomSource`](random::RandomSource). The shell ([`effects`]) routes
//! player intents through guarded transitions executed as Stillwater effects,
//! and [`shell`] is a minimal text front end.
//!
//! # Core Concepts
//!
//! - **Session**: score, streak and the current problem for one player
//! - **Phase**: awaiting an answer, or showing feedback
//! - **Intent**: a mode switch, a submission, or "next question"
//! - **Snapshot**: everything a presentation layer may read
//!
//! # Example
//!
//! ```rust
//! use math_quest::game::{FeedbackKind, Session};
//! use math_quest::random::ScriptedRandom;
//!
//! let mut rng = ScriptedRandom::new([3, 4]);
//! let mut session = Session::new(&mut rng);
//! assert_eq!(session.problem().prompt(), "3 + 4 = ?");
//!
//! session.submit_answer(Some(7), &mut rng);
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.feedback().unwrap().kind, FeedbackKind::Success);
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod game;
pub mod random;
pub mod shell;

// Re-export commonly used types
pub use config::GameConfig;
pub use core::{Phase, State, StateHistory, StateTransition};
pub use effects::{GameEnv, GameMachine, Intent};
pub use game::{GameMode, OperationMode, Session, Snapshot};
