//! Multi-select checkbox prompt.
//!
//! Space toggles the row under the cursor, Enter submits. The upper bound
//! on selections is enforced on every toggle; the lower bound only when
//! submitting. Both violations show a one-shot error under the list that
//! disappears on the next key.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::types::{Choice, Event, Profile};

use super::theme::{self, CheckboxView};
use super::widget::{Pager, Widget};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Settings for a [`CheckboxPrompt`].
#[derive(Debug, Clone)]
pub struct CheckboxConfig {
    /// The question.
    pub message: String,
    /// Dimmed text after the question while choosing. Default: empty.
    pub hint: String,
    /// Rows shown at once. Default: unbounded.
    pub page_size: usize,
    /// Fewest selections Enter accepts. Default: 0.
    pub min_selection: usize,
    /// Most selections Space allows. Default: unbounded.
    pub max_selection: usize,
    /// Glyphs. Default: the profile's.
    pub view: CheckboxView,
}

impl CheckboxConfig {
    pub fn new(message: impl Into<String>, profile: Profile) -> Self {
        CheckboxConfig {
            message: message.into(),
            hint: String::new(),
            page_size: usize::MAX,
            min_selection: 0,
            max_selection: usize::MAX,
            view: CheckboxView::new(profile),
        }
    }
}

// ============================================================================
// WIDGET
// ============================================================================

/// Pick any number of choices within `[min_selection, max_selection]`.
#[derive(Debug, Clone)]
pub struct CheckboxPrompt<T> {
    config: CheckboxConfig,
    choices: Vec<Choice<T>>,
    pager: Pager,
    /// Indices, kept sorted so the answer follows choice order.
    selected: BTreeSet<usize>,
    interacting: bool,
    error: Option<String>,
}

impl<T> CheckboxPrompt<T> {
    pub fn new(config: CheckboxConfig, choices: Vec<Choice<T>>) -> Result<Self> {
        if config.page_size == 0 {
            return Err(Error::ZeroPageSize);
        }
        if config.min_selection > config.max_selection {
            return Err(Error::SelectionBounds {
                min: config.min_selection,
                max: config.max_selection,
            });
        }
        let pager = Pager::new(choices.len(), config.page_size);
        Ok(CheckboxPrompt {
            config,
            choices,
            pager,
            selected: BTreeSet::new(),
            interacting: true,
            error: None,
        })
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Selected indices in choice order.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// The error shown under the list, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn toggle(&mut self) {
        if self.pager.is_empty() {
            return;
        }
        let index = self.pager.cursor();
        if self.selected.remove(&index) {
            return;
        }
        if self.selected.len() < self.config.max_selection {
            self.selected.insert(index);
        } else {
            tracing::debug!(max = self.config.max_selection, "toggle rejected at max selection");
            self.error = Some(format!("max selection: {}", self.config.max_selection));
        }
    }

    fn submit(&mut self) {
        if self.selected.len() < self.config.min_selection {
            tracing::debug!(
                selected = self.selected.len(),
                min = self.config.min_selection,
                "submit rejected below min selection"
            );
            self.error = Some(format!("min selection: {}", self.config.min_selection));
        } else {
            self.interacting = false;
        }
    }

    fn selected_choices(&self) -> impl Iterator<Item = &Choice<T>> {
        self.selected.iter().filter_map(|&i| self.choices.get(i))
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
            let is_selected = self.selected.contains(&index);
            out.push_str(if index == self.pager.cursor() {
                &view.cursor
            } else {
                &view.non_cursor
            });
            out.push_str(if is_selected { &view.checked } else { &view.unchecked });
            if is_selected {
                out.push_str(&theme::paint(&choice.display_name, theme::highlight()));
            } else {
                out.push_str(&choice.display_name);
            }
            out.push('\n');
        }
    }
}

impl<T: Clone> Widget for CheckboxPrompt<T> {
    type Output = Vec<T>;

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
            if let Some(error) = self.error.as_deref().filter(|e| theme::is_not_blank(e)) {
                out.push_str(&theme::paint(error, theme::error()));
                out.push('\n');
            }
        } else {
            let names: Vec<&str> = self
                .selected_choices()
                .map(|c| c.display_name.as_str())
                .collect();
            out.push_str(&theme::paint(names.join(", "), theme::highlight()));
            out.push('\n');
        }
        out
    }

    fn is_interacting(&self) -> bool {
        self.interacting
    }

    fn on_event(&mut self, event: Event) {
        self.error = None;
        match event {
            Event::Up => self.pager.move_up(),
            Event::Down => self.pager.move_down(),
            Event::Space => self.toggle(),
            Event::Enter => self.submit(),
            _ => {}
        }
    }

    fn value(&self) -> Vec<T> {
        self.selected_choices().map(|c| c.data.clone()).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A..D carrying "1".."4", two per page, between one and two picks.
    fn abcd() -> CheckboxPrompt<String> {
        let config = CheckboxConfig {
            hint: "please select something".to_string(),
            page_size: 2,
            min_selection: 1,
            max_selection: 2,
            ..CheckboxConfig::new("hello?", Profile::Modern)
        };
        let choices = vec![
            Choice::new("A", "1".to_string()),
            Choice::new("B", "2".to_string()),
            Choice::new("C", "3".to_string()),
            Choice::new("D", "4".to_string()),
        ];
        CheckboxPrompt::new(config, choices).unwrap()
    }

    fn feed<W: Widget>(widget: &mut W, events: &[Event]) {
        for &event in events {
            widget.on_event(event);
        }
    }

    fn header() -> String {
        format!(
            "{} {} {}\n",
            theme::default_question_mark(),
            theme::paint("hello?", theme::message()),
            theme::paint("please select something", theme::dim()),
        )
    }

    fn cursor() -> String {
        theme::paint(" ❯ ", theme::cursor())
    }

    fn checked() -> String {
        theme::paint("◉ ", theme::checked())
    }

    fn notice() -> String {
        format!("{}\n", theme::paint(theme::PAGINATION_NOTICE, theme::dim()))
    }

    fn error_line(message: &str) -> String {
        format!("{}\n", theme::paint(message, theme::error()))
    }

    // -- Construction --

    #[test]
    fn zero_page_size_is_rejected() {
        let config = CheckboxConfig {
            page_size: 0,
            ..CheckboxConfig::new("?", Profile::Modern)
        };
        let result = CheckboxPrompt::new(config, vec![Choice::plain("a")]);
        assert!(matches!(result, Err(Error::ZeroPageSize)));
    }

    #[test]
    fn min_above_max_is_rejected() {
        let config = CheckboxConfig {
            min_selection: 3,
            max_selection: 2,
            ..CheckboxConfig::new("?", Profile::Modern)
        };
        let result = CheckboxPrompt::new(config, vec![Choice::plain("a")]);
        assert!(matches!(result, Err(Error::SelectionBounds { min: 3, max: 2 })));
    }

    // -- Scrolling --

    #[test]
    fn scrolling_down_two_steps() {
        let mut checkbox = abcd();
        feed(&mut checkbox, &[Event::Down, Event::Down]);
        let expected = format!("{}   ◯ B\n{}◯ C\n{}", header(), cursor(), notice());
        assert_eq!(checkbox.render(), expected);
    }

    #[test]
    fn scrolling_down_till_the_end() {
        let mut checkbox = abcd();
        feed(&mut checkbox, &[Event::Down; 6]);
        let expected = format!("{}   ◯ C\n{}◯ D\n{}", header(), cursor(), notice());
        assert_eq!(checkbox.render(), expected);
    }

    #[test]
    fn scrolling_down_and_back_up() {
        let mut checkbox = abcd();
        feed(&mut checkbox, &[Event::Down; 4]);
        feed(&mut checkbox, &[Event::Up; 5]);
        let expected = format!("{}{}◯ A\n   ◯ B\n{}", header(), cursor(), notice());
        assert_eq!(checkbox.render(), expected);
    }

    // -- Selection bounds --

    #[test]
    fn space_at_max_is_rejected_with_message() {
        let mut checkbox = abcd();
        feed(
            &mut checkbox,
            &[Event::Space, Event::Down, Event::Space, Event::Down, Event::Space],
        );
        assert_eq!(checkbox.selected().iter().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(checkbox.error(), Some("max selection: 2"));

        let expected = format!(
            "{}   {}{}\n{}◯ C\n{}{}",
            header(),
            checked(),
            theme::paint("B", theme::highlight()),
            cursor(),
            notice(),
            error_line("max selection: 2"),
        );
        assert_eq!(checkbox.render(), expected);
    }

    #[test]
    fn enter_below_min_keeps_interacting() {
        let mut checkbox = abcd();
        checkbox.on_event(Event::Enter);
        assert!(checkbox.is_interacting());
        let expected = format!(
            "{}{}◯ A\n   ◯ B\n{}{}",
            header(),
            cursor(),
            notice(),
            error_line("min selection: 1"),
        );
        assert_eq!(checkbox.render(), expected);
    }

    #[test]
    fn error_clears_on_next_event() {
        let mut checkbox = abcd();
        checkbox.on_event(Event::Enter);
        assert!(checkbox.error().is_some());
        checkbox.on_event(Event::Unrecognized);
        assert_eq!(checkbox.error(), None);
        assert!(!checkbox.render().contains("min selection"));
    }

    #[test]
    fn space_toggles_off() {
        let mut checkbox = abcd();
        feed(&mut checkbox, &[Event::Space, Event::Space]);
        assert!(checkbox.selected().is_empty());
    }

    #[test]
    fn deselecting_at_max_is_allowed() {
        let mut checkbox = abcd();
        feed(&mut checkbox, &[Event::Space, Event::Down, Event::Space, Event::Space]);
        assert_eq!(checkbox.error(), None);
        assert_eq!(checkbox.selected().len(), 1);
    }

    #[test]
    fn max_never_exceeded_for_any_sequence() {
        let keys = [Event::Up, Event::Down, Event::Space];
        // Every sequence of 7 keys drawn from Up/Down/Space.
        for code in 0..3usize.pow(7) {
            let mut checkbox = abcd();
            let mut rest = code;
            for _ in 0..7 {
                checkbox.on_event(keys[rest % 3]);
                rest /= 3;
                assert!(checkbox.selected().len() <= 2);
                let pager = checkbox.pager();
                assert!(pager.start() <= pager.cursor());
                assert!(pager.cursor() <= pager.start() + 1);
            }
        }
    }

    // -- Completion --

    #[test]
    fn value_follows_choice_order() {
        let mut checkbox = abcd();
        feed(&mut checkbox, &[Event::Space, Event::Down, Event::Space, Event::Enter]);
        assert!(!checkbox.is_interacting());
        assert_eq!(checkbox.value(), vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn value_ignores_selection_order() {
        let mut checkbox = abcd();
        feed(
            &mut checkbox,
            &[Event::Down, Event::Down, Event::Space, Event::Up, Event::Up, Event::Space, Event::Enter],
        );
        assert_eq!(checkbox.value(), vec!["1".to_string(), "3".to_string()]);
    }

    #[test]
    fn done_renders_joined_names() {
        let mut checkbox = abcd();
        feed(&mut checkbox, &[Event::Space, Event::Down, Event::Space, Event::Enter]);
        let expected = format!(
            "{} {} {}\n",
            theme::default_question_mark(),
            theme::paint("hello?", theme::message()),
            theme::paint("A, B", theme::highlight()),
        );
        assert_eq!(checkbox.render(), expected);
    }

    #[test]
    fn custom_view_glyphs_are_used_verbatim() {
        let config = CheckboxConfig {
            hint: "please select something".to_string(),
            view: CheckboxView {
                question_mark: "❓".to_string(),
                cursor: "👉".to_string(),
                non_cursor: " ".to_string(),
                checked: " ✅ ".to_string(),
                unchecked: " ⏹ ".to_string(),
            },
            ..CheckboxConfig::new("hello?", Profile::Modern)
        };
        let mut checkbox =
            CheckboxPrompt::new(config, vec![Choice::new("A", 1), Choice::new("B", 2)]).unwrap();
        feed(&mut checkbox, &[Event::Space, Event::Down]);

        let expected = format!(
            "❓ {} {}\n  ✅ {}\n👉 ⏹ B\n",
            theme::paint("hello?", theme::message()),
            theme::paint("please select something", theme::dim()),
            theme::paint("A", theme::highlight()),
        );
        assert_eq!(checkbox.render(), expected);
    }

    #[test]
    fn empty_checkbox_submits_nothing() {
        let config = CheckboxConfig::new("none?", Profile::Legacy);
        let mut checkbox = CheckboxPrompt::<u8>::new(config, vec![]).unwrap();
        feed(&mut checkbox, &[Event::Down, Event::Space, Event::Enter]);
        assert!(!checkbox.is_interacting());
        assert!(checkbox.value().is_empty());
    }

    #[test]
    fn render_is_pure() {
        let mut checkbox = abcd();
        feed(&mut checkbox, &[Event::Space, Event::Down]);
        assert_eq!(checkbox.render(), checkbox.render());
    }
}
