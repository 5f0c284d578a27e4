//! Single-choice list prompt.

use crate::error::{Error, Result};
use crate::types::{Choice, Event, Profile};

use super::theme::{self, ListView};
use super::widget::{Pager, Widget};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Settings for a [`ListPrompt`].
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// The question.
    pub message: String,
    /// Dimmed text after the question while choosing. Default: empty.
    pub hint: String,
    /// Rows shown at once. Default: unbounded.
    pub page_size: usize,
    /// Glyphs. Default: the profile's.
    pub view: ListView,
}

impl ListConfig {
    pub fn new(message: impl Into<String>, profile: Profile) -> Self {
        ListConfig {
            message: message.into(),
            hint: String::new(),
            page_size: usize::MAX,
            view: ListView::new(profile),
        }
    }
}

// ============================================================================
// WIDGET
// ============================================================================

/// Pick exactly one choice with the arrow keys, confirm with Enter.
#[derive(Debug, Clone)]
pub struct ListPrompt<T> {
    config: ListConfig,
    choices: Vec<Choice<T>>,
    pager: Pager,
    interacting: bool,
}

impl<T> ListPrompt<T> {
    pub fn new(config: ListConfig, choices: Vec<Choice<T>>) -> Result<Self> {
        if choices.is_empty() {
            return Err(Error::NoChoices);
        }
        if config.page_size == 0 {
            return Err(Error::ZeroPageSize);
        }
        let pager = Pager::new(choices.len(), config.page_size);
        Ok(ListPrompt {
            config,
            choices,
            pager,
            interacting: true,
        })
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    fn current(&self) -> &Choice<T> {
        &self.choices[self.pager.cursor()]
    }

    fn render_rows(&self, out: &mut String) {
        let view = &self.config.view;
        let visible = self
            .choices
            .iter()
            .enumerate()
            .skip(self.pager.start())
            .take(self.pager.page_size());

        for (index, choice) in visible {
            if index == self.pager.cursor() {
                out.push_str(&view.cursor);
                out.push_str(&theme::paint(&choice.display_name, theme::highlight()));
            } else {
                out.push_str(&view.non_cursor);
                out.push_str(&choice.display_name);
            }
            out.push('\n');
        }
    }
}

impl<T: Clone> Widget for ListPrompt<T> {
    type Output = T;

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.config.view.question_mark);
        out.push(' ');
        out.push_str(&theme::paint(&self.config.message, theme::message()));
        out.push(' ');

        if self.interacting {
            if theme::is_not_blank(&self.config.hint) {
                out.push_str(&theme::paint(&self.config.hint, theme::dim()));
            }
            out.push('\n');
            self.render_rows(&mut out);
            if self.pager.is_paginated() {
                out.push_str(&theme::paint(theme::PAGINATION_NOTICE, theme::dim()));
                out.push('\n');
            }
        } else {
            out.push_str(&theme::paint(&self.current().display_name, theme::highlight()));
            out.push('\n');
        }
        out
    }

    fn is_interacting(&self) -> bool {
        self.interacting
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Up => self.pager.move_up(),
            Event::Down => self.pager.move_down(),
            Event::Enter => self.interacting = false,
            _ => {}
        }
    }

    fn value(&self) -> T {
        self.current().data.clone()
    }
}

// ============================================================================
// TESTS
// ============================================================================
