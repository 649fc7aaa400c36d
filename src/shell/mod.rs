//! Minimal text presentation layer.
//!
//! Parses player input into intents and renders snapshots as plain text.
//! The binary wires these to stdin and stdout.

mod command;
mod render;

pub use command::{parse_command, Command, CommandError};
pub use render::{render_error, render_snapshot, render_step, HELP};
