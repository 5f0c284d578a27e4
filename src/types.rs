//! Domain types for termprompt.
//!
//! Everything a prompt reads or produces: choices, logical key events and
//! the terminal profile. No I/O here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// CHOICES
// ============================================================================

/// One selectable entry of a list or checkbox prompt.
///
/// Identity is positional: two choices may share a display name and are
/// still distinct if they sit at different indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice<T> {
    /// Text shown to the user.
    pub display_name: String,
    /// Value handed back when this choice is picked.
    pub data: T,
}

impl<T> Choice<T> {
    pub fn new(display_name: impl Into<String>, data: T) -> Self {
        Choice {
            display_name: display_name.into(),
            data,
        }
    }
}

impl Choice<String> {
    /// A choice whose data is its own display name.
    pub fn plain(name: impl Into<String>) -> Self {
        let name = name.into();
        Choice {
            display_name: name.clone(),
            data: name,
        }
    }
}

// ============================================================================
// EVENTS
// ============================================================================

/// Logical key event, decoded from raw terminal bytes.
///
/// Exactly one is produced per decode call. Widgets match on these and
/// never see raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Arrow up. Modern `ESC [ A`, legacy `ESC O A`.
    Up,
    /// Arrow down. Modern `ESC [ B`, legacy `ESC O B`.
    Down,
    /// Arrow right. Modern `ESC [ C`, legacy `ESC O C`.
    Right,
    /// Arrow left. Modern `ESC [ D`, legacy `ESC O D`.
    Left,
    /// Carriage return (13).
    Enter,
    /// Space bar (32).
    Space,
    /// 127 on every profile, 8 on legacy terminals.
    Backspace,
    /// Ctrl-L (12).
    ClearScreen,
    /// An escape sequence or byte run we don't understand. Always a no-op.
    Unrecognized,
    /// Any other key: one ASCII byte or one complete UTF-8 character.
    Char(char),
}

impl Event {
    /// Variant name without the payload. Safe to log: typed characters
    /// may belong to a password.
    pub fn kind(self) -> &'static str {
        match self {
            Event::Up => "up",
            Event::Down => "down",
            Event::Right => "right",
            Event::Left => "left",
            Event::Enter => "enter",
            Event::Space => "space",
            Event::Backspace => "backspace",
            Event::ClearScreen => "clear_screen",
            Event::Unrecognized => "unrecognized",
            Event::Char(_) => "char",
        }
    }
}

// ============================================================================
// PROFILE
// ============================================================================

/// Terminal dialect: escape introducer and glyph defaults.
///
/// Picked once at startup (see [`crate::platform::detect_profile`]) and
/// passed explicitly to everything that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Windows-style console: `ESC O` arrows, ASCII glyphs.
    Legacy,
    /// Everything else: `ESC [` arrows, Unicode glyphs.
    #[default]
    Modern,
}

impl Profile {
    /// Second byte of an arrow-key escape sequence.
    pub fn escape_introducer(self) -> u8 {
        match self {
            Profile::Legacy => b'O',
            Profile::Modern => b'[',
        }
    }

    /// Whether `byte` means backspace on this profile.
    pub fn is_backspace(self, byte: u8) -> bool {
        match self {
            Profile::Legacy => byte == 8 || byte == 127,
            Profile::Modern => byte == 127,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Legacy => write!(f, "legacy"),
            Profile::Modern => write!(f, "modern"),
        }
    }
}

/// Error for an unknown profile name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown terminal profile: {0} (expected legacy or modern)")]
pub struct UnknownProfile(pub String);

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Profile::Legacy),
            "modern" => Ok(Profile::Modern),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
