//! Yes/no prompt.

use crate::types::Event;

use super::theme;
use super::widget::Widget;

/// Settings for a [`ConfirmPrompt`].
#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    pub message: String,
    /// Starting answer. Default: `false`.
    pub default: bool,
    pub question_mark: String,
}

impl ConfirmConfig {
    pub fn new(message: impl Into<String>) -> Self {
        ConfirmConfig {
            message: message.into(),
            default: false,
            question_mark: theme::default_question_mark(),
        }
    }
}

/// Toggle between Yes and No, confirm with Enter.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    config: ConfirmConfig,
    confirmed: bool,
    interacting: bool,
}

impl ConfirmPrompt {
    pub fn new(config: ConfirmConfig) -> Self {
        ConfirmPrompt {
            confirmed: config.default,
            config,
            interacting: true,
        }
    }
}

impl Widget for ConfirmPrompt {
    type Output = bool;

    fn render(&self) -> String {
        let mut out = format!(
            "{} {} ",
            self.config.question_mark,
            theme::paint(&self.config.message, theme::message())
        );
        match (self.interacting, self.confirmed) {
            (true, true) => out.push_str("[Yes] No "),
            (true, false) => out.push_str(" Yes [No]"),
            (false, confirmed) => {
                let answer = if confirmed { "Yes" } else { "No" };
                out.push_str(&theme::paint(answer, theme::highlight()));
                out.push('\n');
            }
        }
        out
    }

    fn is_interacting(&self) -> bool {
        self.interacting
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Left | Event::Char('y' | 'Y') => self.confirmed = true,
            Event::Enter => self.interacting = false,
            Event::Unrecognized => {}
            // Right, 'n', and anything else the user types means no.
            _ => self.confirmed = false,
        }
    }

    fn value(&self) -> bool {
        self.confirmed
    }
}
