//! Effects boundary: the interaction loop and terminal lifecycle.
//!
//! Widgets, the decoder and the surface are all pure or generic over
//! their I/O. This module is where they meet a real terminal. Tests drive
//! [`Session`] with byte slices instead.

use std::io::{self, Read, Write};
use std::sync::Once;

use bigdecimal::BigDecimal;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::decoder::Decoder;
use crate::error::{Error, Result};
use crate::platform::detect_profile;
use crate::types::{Choice, Event, Profile};

use super::checkbox::{CheckboxConfig, CheckboxPrompt};
use super::confirm::{ConfirmConfig, ConfirmPrompt};
use super::input::{InputConfig, InputPrompt, NumberPrompt};
use super::list::{ListConfig, ListPrompt};
use super::surface::Surface;
use super::widget::Widget;

/// Ctrl-C as seen in raw mode, where it no longer raises SIGINT.
const INTERRUPT: char = '\u{3}';

/// Rows per page used by [`Prompter::checkbox`].
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// SESSION
// ============================================================================

/// A byte source, a repaint surface, and the decoder between them.
#[derive(Debug)]
pub struct Session<R: Read, W: Write> {
    decoder: Decoder,
    input: R,
    surface: Surface<W>,
}

impl<R: Read, W: Write> Session<R, W> {
    pub fn new(profile: Profile, input: R, output: W) -> Self {
        Session {
            decoder: Decoder::new(profile),
            input,
            surface: Surface::new(output),
        }
    }

    pub fn surface(&self) -> &Surface<W> {
        &self.surface
    }

    pub fn into_output(self) -> W {
        self.surface.into_inner()
    }

    /// Run `widget` until it stops interacting and return its value.
    ///
    /// Ctrl-C aborts with [`Error::Interrupted`]. A closed input aborts
    /// with the underlying `UnexpectedEof`.
    pub fn run<Wd: Widget>(&mut self, mut widget: Wd) -> Result<Wd::Output> {
        tracing::debug!(profile = %self.decoder.profile(), "prompt started");
        self.surface.reset();
        self.surface.display(&widget.render())?;

        while widget.is_interacting() {
            let event = self.decoder.decode(&mut self.input)?;
            tracing::debug!(event = event.kind(), "decoded");
            if event == Event::Char(INTERRUPT) {
                tracing::debug!("prompt interrupted");
                return Err(Error::Interrupted);
            }
            widget.on_event(event);
            self.surface.display(&widget.render())?;
        }

        tracing::debug!("prompt finished");
        Ok(widget.value())
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Raw mode for as long as the guard lives.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(error = %err, "failed to leave raw mode");
        }
    }
}

/// Install, once per process, a panic hook that leaves raw mode before
/// the panic message is printed.
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            original_hook(panic_info);
        }));
    });
}

// ============================================================================
// PROMPTER
// ============================================================================

/// Front door for prompting on the real terminal.
///
/// Holds the profile so every config it builds and every session it runs
/// agree on glyphs and escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompter {
    profile: Profile,
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter {
    /// Profile from the environment; see [`detect_profile`].
    pub fn new() -> Self {
        Self::with_profile(detect_profile())
    }

    pub fn with_profile(profile: Profile) -> Self {
        Prompter { profile }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Run any widget on stdin/stdout in raw mode.
    pub fn prompt<Wd: Widget>(&self, widget: Wd) -> Result<Wd::Output> {
        install_panic_hook();
        let _raw = RawModeGuard::enable()?;
        let mut session = Session::new(self.profile, io::stdin().lock(), io::stdout().lock());
        session.run(widget)
    }

    pub fn list_config(&self, message: impl Into<String>) -> ListConfig {
        ListConfig::new(message, self.profile)
    }

    pub fn checkbox_config(&self, message: impl Into<String>) -> CheckboxConfig {
        CheckboxConfig::new(message, self.profile)
    }

    pub fn confirm_config(&self, message: impl Into<String>) -> ConfirmConfig {
        ConfirmConfig::new(message)
    }

    pub fn input_config(&self, message: impl Into<String>) -> InputConfig {
        InputConfig::new(message)
    }

    pub fn list(&self, message: impl Into<String>, choices: Vec<String>) -> Result<String> {
        self.list_object(self.list_config(message), plain_choices(choices))
    }

    pub fn list_object<T: Clone>(&self, config: ListConfig, choices: Vec<Choice<T>>) -> Result<T> {
        self.prompt(ListPrompt::new(config, choices)?)
    }

    /// Multi-select with [`DEFAULT_PAGE_SIZE`] rows per page.
    pub fn checkbox(&self, message: impl Into<String>, choices: Vec<String>) -> Result<Vec<String>> {
        let config = CheckboxConfig {
            page_size: DEFAULT_PAGE_SIZE,
            ..self.checkbox_config(message)
        };
        self.checkbox_object(config, plain_choices(choices))
    }

    pub fn checkbox_object<T: Clone>(
        &self,
        config: CheckboxConfig,
        choices: Vec<Choice<T>>,
    ) -> Result<Vec<T>> {
        self.prompt(CheckboxPrompt::new(config, choices)?)
    }

    pub fn confirm(&self, message: impl Into<String>, default: bool) -> Result<bool> {
        let config = ConfirmConfig {
            default,
            ..self.confirm_config(message)
        };
        self.prompt(ConfirmPrompt::new(config))
    }

    pub fn input(&self, config: InputConfig) -> Result<String> {
        self.prompt(InputPrompt::new(config))
    }

    pub fn password(&self, message: impl Into<String>, mask: char) -> Result<String> {
        self.input(self.input_config(message).password(mask))
    }

    pub fn number(&self, config: InputConfig) -> Result<BigDecimal> {
        self.prompt(NumberPrompt::new(config))?
    }
}

fn plain_choices(names: Vec<String>) -> Vec<Choice<String>> {
    names.into_iter().map(Choice::plain).collect()
}

// ============================================================================
// TESTS
// ============================================================================
