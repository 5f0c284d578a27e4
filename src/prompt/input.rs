//! Free-text prompt, plus its password and numeric variants.
//!
//! Three caller-supplied functions shape the input:
//! - `filter` runs on the would-be buffer before each keystroke is
//!   accepted. A rejected key is dropped without any message.
//! - `validate` runs on Enter. Failure shows "invalid input".
//! - `transform` only affects what is drawn. The stored text is never
//!   changed by it.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;

use crate::error::{Error, Result};
use crate::types::Event;

use super::theme;
use super::widget::Widget;

/// A check on the current text.
pub type Predicate = Box<dyn Fn(&str) -> bool>;

/// A display-only rewrite of the current text.
pub type Transform = Box<dyn Fn(&str) -> String>;

/// Shown when `validate` rejects the text on Enter.
pub const INVALID_INPUT: &str = "invalid input";

/// Mask used by password prompts unless told otherwise.
pub const DEFAULT_MASK: char = '*';

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Settings for an [`InputPrompt`].
pub struct InputConfig {
    pub message: String,
    /// Answer when the user submits nothing. Default: empty.
    pub default: String,
    /// Dimmed text shown while the buffer is empty. Default: empty.
    pub hint: String,
    /// Checked on Enter. Default: accept everything.
    pub validate: Predicate,
    /// Checked before each keystroke. Default: accept everything.
    pub filter: Predicate,
    /// Applied when drawing. Default: identity.
    pub transform: Transform,
    pub question_mark: String,
}

impl InputConfig {
    pub fn new(message: impl Into<String>) -> Self {
        InputConfig {
            message: message.into(),
            default: String::new(),
            hint: String::new(),
            validate: Box::new(|_| true),
            filter: Box::new(|_| true),
            transform: Box::new(str::to_string),
            question_mark: theme::default_question_mark(),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_validation(mut self, validate: impl Fn(&str) -> bool + 'static) -> Self {
        self.validate = Box::new(validate);
        self
    }

    pub fn with_filter(mut self, filter: impl Fn(&str) -> bool + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn with_transform(mut self, transform: impl Fn(&str) -> String + 'static) -> Self {
        self.transform = Box::new(transform);
        self
    }

    /// Draw every character as `mask`. The real text is kept as typed.
    pub fn password(self, mask: char) -> Self {
        self.with_transform(move |s| s.chars().map(|_| mask).collect())
    }
}

impl fmt::Debug for InputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputConfig")
            .field("message", &self.message)
            .field("default", &self.default)
            .field("hint", &self.hint)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TEXT INPUT
// ============================================================================

/// Type a line of text, submit with Enter.
#[derive(Debug)]
pub struct InputPrompt {
    config: InputConfig,
    buffer: String,
    interacting: bool,
    error: Option<String>,
}

impl InputPrompt {
    pub fn new(config: InputConfig) -> Self {
        InputPrompt {
            config,
            buffer: String::new(),
            interacting: true,
            error: None,
        }
    }

    /// What has been typed so far, without the default.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn push(&mut self, c: char) {
        let mut candidate = self.buffer.clone();
        candidate.push(c);
        if (self.config.filter)(&candidate) {
            self.buffer = candidate;
        }
    }

    fn submit(&mut self) {
        let value = self.value();
        if (self.config.validate)(&value) {
            self.interacting = false;
        } else {
            tracing::debug!(len = value.len(), "input failed validation");
            self.error = Some(INVALID_INPUT.to_string());
        }
    }
}

impl Widget for InputPrompt {
    type Output = String;

    fn render(&self) -> String {
        let mut out = format!(
            "{} {} ",
            self.config.question_mark,
            theme::paint(&self.config.message, theme::message())
        );

        let shown = (self.config.transform)(&self.value());
        if !self.interacting {
            out.push_str(&theme::paint(shown, theme::highlight()));
            out.push('\n');
        } else if self.buffer.is_empty() && theme::is_not_blank(&self.config.hint) {
            let hint = &self.config.hint;
            out.push_str("  ");
            out.push_str(&theme::paint(hint, theme::dim()));
            out.push_str(&theme::cursor_left(theme::width(hint) + 2));
        } else {
            out.push_str(&shown);
            if let Some(error) = self.error.as_deref().filter(|e| theme::is_not_blank(e)) {
                out.push_str("  ");
                out.push_str(&theme::paint(error, theme::error()));
                out.push_str(&theme::cursor_left(theme::width(error) + 2));
            }
        }
        out
    }

    fn is_interacting(&self) -> bool {
        self.interacting
    }

    fn on_event(&mut self, event: Event) {
        self.error = None;
        match event {
            Event::Enter => self.submit(),
            Event::Backspace => {
                self.buffer.pop();
            }
            Event::Space => self.push(' '),
            Event::Char(c) => self.push(c),
            _ => {}
        }
    }

    fn value(&self) -> String {
        if self.buffer.is_empty() {
            self.config.default.clone()
        } else {
            self.buffer.clone()
        }
    }
}

// ============================================================================
// NUMERIC INPUT
// ============================================================================

/// A complete decimal: digits, then optionally a dot and more digits.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.?[0-9]*$").expect("number pattern compiles"));

/// Anything that can still grow into a [`NUMBER`], the empty string included.
static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("number prefix pattern compiles"));

pub fn is_number(text: &str) -> bool {
    NUMBER.is_match(text)
}

pub fn is_number_prefix(text: &str) -> bool {
    NUMBER_PREFIX.is_match(text)
}

/// Parse a numeric answer.
///
/// A trailing dot ("12.") is accepted and means the integer. Anything else
/// the parser rejects is [`Error::InvalidNumber`].
pub fn parse_number(text: &str) -> Result<BigDecimal> {
    let digits = text.strip_suffix('.').unwrap_or(text);
    BigDecimal::from_str(digits).map_err(|source| Error::InvalidNumber {
        input: text.to_string(),
        source,
    })
}

/// Text input restricted to non-negative decimals.
///
/// Replaces the config's `validate` and `filter` with the decimal
/// patterns; `default`, `hint` and `transform` are kept.
#[derive(Debug)]
pub struct NumberPrompt {
    input: InputPrompt,
}

impl NumberPrompt {
    pub fn new(config: InputConfig) -> Self {
        let config = config
            .with_validation(is_number)
            .with_filter(is_number_prefix);
        NumberPrompt {
            input: InputPrompt::new(config),
        }
    }

    pub fn buffer(&self) -> &str {
        self.input.buffer()
    }
}

impl Widget for NumberPrompt {
    type Output = Result<BigDecimal>;

    fn render(&self) -> String {
        self.input.render()
    }

    fn is_interacting(&self) -> bool {
        self.input.is_interacting()
    }

    fn on_event(&mut self, event: Event) {
        self.input.on_event(event);
    }

    /// Before Enter an unfinished number is an ordinary `Err`. After
    /// Enter the text passed validation, so a parse failure means the
    /// patterns disagree with the parser and is logged as an error.
    fn value(&self) -> Result<BigDecimal> {
        parse_number(&self.input.value()).inspect_err(|err| {
            if !self.is_interacting() {
                tracing::error!(error = %err, "validated number failed to parse");
            }
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
