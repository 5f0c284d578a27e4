//! termprompt: interactive terminal prompts over raw-mode byte streams.
//!
//! Layers, from the bytes up:
//! - `decoder`: raw bytes to logical [`Event`]s, per terminal [`Profile`]
//! - `platform`: which profile this terminal speaks
//! - `prompt`: widgets, the repaint surface, and the interaction loop
//! - `report`: answer formatting for the command-line front end

pub mod decoder;
pub mod error;
pub mod platform;
pub mod prompt;
pub mod report;
pub mod types;

#[cfg(test)]
mod testing;

pub use decoder::Decoder;
pub use error::{Error, Result};
pub use prompt::{Prompter, Widget};
pub use types::{Choice, Event, Profile};
