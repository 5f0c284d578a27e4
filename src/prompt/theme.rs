//! Prompt color semantics, glyphs and small ANSI helpers.
//!
//! Pure data plus string builders, consumed by the widget renderers.
//!
//! Color semantics:
//! - Green: the question mark and checked boxes
//! - Cyan: the answer, the choice under the cursor, selected choices
//! - Bright cyan: the cursor glyph
//! - Red: selection and validation errors
//! - Dim (bright black): hints and the pagination notice
//! - Bold: the question itself

use std::fmt::{self, Display};

use crossterm::Command;
use crossterm::cursor::MoveLeft;
use crossterm::style::{Attribute, Color, ContentStyle};
use unicode_width::UnicodeWidthStr;

use crate::types::Profile;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

fn style(foreground: Option<Color>, bold: bool) -> ContentStyle {
    let mut style = ContentStyle {
        foreground_color: foreground,
        ..ContentStyle::default()
    };
    if bold {
        style.attributes.set(Attribute::Bold);
    }
    style
}

/// Question mark prefix: bold green.
pub fn question_mark() -> ContentStyle {
    style(Some(Color::DarkGreen), true)
}

/// The prompt message: bold.
pub fn message() -> ContentStyle {
    style(None, true)
}

/// Hints and informational lines: bright black.
pub fn dim() -> ContentStyle {
    style(Some(Color::DarkGrey), false)
}

/// Cursor glyph: bright cyan.
pub fn cursor() -> ContentStyle {
    style(Some(Color::Cyan), false)
}

/// Checked box glyph: green.
pub fn checked() -> ContentStyle {
    style(Some(Color::DarkGreen), false)
}

/// Highlighted choice and final answer: bold cyan.
pub fn highlight() -> ContentStyle {
    style(Some(Color::DarkCyan), true)
}

/// Inline error: bold red.
pub fn error() -> ContentStyle {
    style(Some(Color::DarkRed), true)
}

// ============================================================================
// HELPERS
// ============================================================================

/// Render `text` wrapped in `style`, reset included.
pub fn paint(text: impl Display, style: ContentStyle) -> String {
    style.apply(text).to_string()
}

/// A crossterm command printed as its ANSI sequence.
struct Ansi<C: Command>(C);

impl<C: Command> fmt::Display for Ansi<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_ansi(f)
    }
}

/// Escape sequence moving the cursor `columns` to the left.
pub fn cursor_left(columns: usize) -> String {
    let columns = u16::try_from(columns).unwrap_or(u16::MAX);
    Ansi(MoveLeft(columns)).to_string()
}

/// Terminal column width of `text`.
pub fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// True when `text` has something other than whitespace.
pub fn is_not_blank(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Shown under a list when not every choice fits on the page.
pub const PAGINATION_NOTICE: &str = "(move up and down to reveal more choices)";

// ============================================================================
// GLYPHS
// ============================================================================

/// The `?` that opens every prompt line.
pub fn default_question_mark() -> String {
    paint("?", question_mark())
}

/// Glyphs for a single-choice list.
///
/// Fields hold fully styled strings and are printed verbatim, so callers
/// can swap in anything (emoji included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub question_mark: String,
    pub cursor: String,
    pub non_cursor: String,
}

impl ListView {
    pub fn new(profile: Profile) -> Self {
        let cursor = match profile {
            Profile::Legacy => " > ",
            Profile::Modern => " ❯ ",
        };
        ListView {
            question_mark: default_question_mark(),
            cursor: paint(cursor, self::cursor()),
            non_cursor: "   ".to_string(),
        }
    }
}

/// Glyphs for a multi-select checkbox list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxView {
    pub question_mark: String,
    pub cursor: String,
    pub non_cursor: String,
    pub checked: String,
    pub unchecked: String,
}

impl CheckboxView {
    pub fn new(profile: Profile) -> Self {
        let list = ListView::new(profile);
        let (checked, unchecked) = match profile {
            Profile::Legacy => ("(*) ", "( ) "),
            Profile::Modern => ("◉ ", "◯ "),
        };
        CheckboxView {
            question_mark: list.question_mark,
            cursor: list.cursor,
            non_cursor: list.non_cursor,
            checked: paint(checked, self::checked()),
            unchecked: unchecked.to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(question_mark().foreground_color, Some(Color::DarkGreen));
        assert_eq!(dim().foreground_color, Some(Color::DarkGrey));
        assert_eq!(cursor().foreground_color, Some(Color::Cyan));
        assert_eq!(highlight().foreground_color, Some(Color::DarkCyan));
        assert_eq!(error().foreground_color, Some(Color::DarkRed));
        assert_eq!(message().foreground_color, None);
    }

    #[test]
    fn emphasis_styles_are_bold() {
        for s in [question_mark(), message(), highlight(), error()] {
            assert!(s.attributes.has(Attribute::Bold));
        }
        assert!(!dim().attributes.has(Attribute::Bold));
    }

    #[test]
    fn paint_keeps_the_text() {
        assert!(paint("hello", highlight()).contains("hello"));
    }

    #[test]
    fn cursor_left_is_a_csi_sequence() {
        assert_eq!(cursor_left(5), "\x1b[5D");
        assert_eq!(cursor_left(12), "\x1b[12D");
    }

    #[test]
    fn cursor_left_saturates_at_terminal_limit() {
        assert_eq!(cursor_left(usize::MAX), format!("\x1b[{}D", u16::MAX));
    }

    #[test]
    fn width_counts_columns_not_bytes() {
        assert_eq!(width("abc"), 3);
        assert_eq!(width("◯"), 1);
        assert_eq!(width("日本"), 4);
    }

    #[test]
    fn blank_detection() {
        assert!(!is_not_blank(""));
        assert!(!is_not_blank("   "));
        assert!(is_not_blank(" x "));
    }

    #[test]
    fn glyphs_follow_profile() {
        let legacy = CheckboxView::new(Profile::Legacy);
        let modern = CheckboxView::new(Profile::Modern);
        assert!(legacy.cursor.contains(" > "));
        assert!(modern.cursor.contains(" ❯ "));
        assert_eq!(legacy.unchecked, "( ) ");
        assert_eq!(modern.unchecked, "◯ ");
        assert!(legacy.checked.contains("(*) "));
        assert!(modern.checked.contains("◉ "));
        assert_eq!(legacy.non_cursor, "   ");
    }

    #[test]
    fn question_mark_is_shared_by_both_views() {
        let profile = Profile::Modern;
        assert_eq!(ListView::new(profile).question_mark, CheckboxView::new(profile).question_mark);
    }
}
