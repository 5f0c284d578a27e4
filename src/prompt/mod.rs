//! Interactive prompts.
//!
//! Architecture: pure widgets over a thin effects layer.
//! - `widget`: the contract every prompt implements, plus pagination
//! - `list`, `checkbox`, `confirm`, `input`: the widgets (pure)
//! - `theme`: styles and glyph sets (pure)
//! - `surface`: repaint region over any writer
//! - `run`: the interaction loop and terminal lifecycle (effects)

pub mod checkbox;
pub mod confirm;
pub mod input;
pub mod list;
pub mod run;
pub mod surface;
pub mod theme;
pub mod widget;

pub use checkbox::{CheckboxConfig, CheckboxPrompt};
pub use confirm::{ConfirmConfig, ConfirmPrompt};
pub use input::{InputConfig, InputPrompt, NumberPrompt};
pub use list::{ListConfig, ListPrompt};
pub use run::{DEFAULT_PAGE_SIZE, Prompter, RawModeGuard, Session};
pub use surface::Surface;
pub use theme::{CheckboxView, ListView};
pub use widget::{Pager, Widget};
