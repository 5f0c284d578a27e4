//! Raw terminal bytes → logical events.
//!
//! The decoder reads from a blocking byte source in raw mode and returns
//! exactly one [`Event`] per call. Escape sequences are resolved inside a
//! single call: nothing is left pending for the next one.

use std::io::{self, Read};

use crate::types::{Event, Profile};

const ESC: u8 = 27;
const ENTER: u8 = 13;
const SPACE: u8 = 32;
const FORM_FEED: u8 = 12;

/// Stateless event decoder for one terminal profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    profile: Profile,
}

impl Decoder {
    pub fn new(profile: Profile) -> Self {
        Decoder { profile }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Read one event from `source`, blocking until a byte is available.
    ///
    /// Fails with `UnexpectedEof` only if the source is exhausted before
    /// the first byte. A sequence cut short after `ESC` decodes as
    /// [`Event::Unrecognized`].
    pub fn decode<R: Read + ?Sized>(&self, source: &mut R) -> io::Result<Event> {
        let first = read_byte(source)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
        })?;

        let event = match first {
            ESC => self.decode_escape(source)?,
            ENTER => Event::Enter,
            SPACE => Event::Space,
            FORM_FEED => Event::ClearScreen,
            b if self.profile.is_backspace(b) => Event::Backspace,
            b if b.is_ascii() => Event::Char(b as char),
            b => decode_utf8(b, source)?,
        };
        Ok(event)
    }

    /// Resolve the bytes following `ESC`.
    fn decode_escape<R: Read + ?Sized>(&self, source: &mut R) -> io::Result<Event> {
        match read_byte(source)? {
            Some(b) if b == self.profile.escape_introducer() => {}
            _ => return Ok(Event::Unrecognized),
        }

        let event = match read_byte(source)? {
            Some(b'A') => Event::Up,
            Some(b'B') => Event::Down,
            Some(b'C') => Event::Right,
            Some(b'D') => Event::Left,
            _ => Event::Unrecognized,
        };
        Ok(event)
    }
}

/// Resolve a multi-byte UTF-8 character whose first byte is `lead`.
///
/// Continuation bytes are read within the same call. A stray
/// continuation byte, an invalid lead, or a sequence that is cut short
/// or malformed decodes as [`Event::Unrecognized`].
fn decode_utf8<R: Read + ?Sized>(lead: u8, source: &mut R) -> io::Result<Event> {
    let len = match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Ok(Event::Unrecognized),
    };

    let mut buf = [lead, 0, 0, 0];
    for slot in buf.iter_mut().take(len).skip(1) {
        match read_byte(source)? {
            Some(b) if b & 0xC0 == 0x80 => *slot = b,
            _ => return Ok(Event::Unrecognized),
        }
    }

    // Overlong forms and surrogates pass the byte-shape checks above.
    let event = std::str::from_utf8(&buf[..len])
        .ok()
        .and_then(|s| s.chars().next())
        .map_or(Event::Unrecognized, Event::Char);
    Ok(event)
}

/// Read a single byte. `None` means end of input.
fn read_byte<R: Read + ?Sized>(source: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match source.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
