//! Repaint region for the active prompt.
//!
//! Every display erases what the previous display drew and writes the
//! new text in its place. The surface only knows how many lines it drew
//! last time; it never reads the terminal.

use std::io::{self, Write};

use crossterm::cursor::{MoveToColumn, MoveToPreviousLine};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// A writer plus the height of the last thing written to it.
#[derive(Debug)]
pub struct Surface<W: Write> {
    out: W,
    previous_height: usize,
}

impl<W: Write> Surface<W> {
    pub fn new(out: W) -> Self {
        Surface {
            out,
            previous_height: 0,
        }
    }

    /// Forget the previous render. Called when a new prompt starts, so
    /// the answers of earlier prompts stay on screen.
    pub fn reset(&mut self) {
        self.previous_height = 0;
    }

    /// Lines drawn by the last [`Surface::display`], counting the segment
    /// after a trailing newline.
    pub fn previous_height(&self) -> usize {
        self.previous_height
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Replace the previous render with `text`.
    pub fn display(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        if self.previous_height > 2 {
            for _ in 0..self.previous_height - 1 {
                queue!(self.out, Clear(ClearType::CurrentLine), MoveToPreviousLine(1))?;
            }
            queue!(self.out, Clear(ClearType::CurrentLine))?;
        }

        // Raw mode turns off output post-processing, so a bare LF would
        // leave the cursor in its column.
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.out.write_all(first.as_bytes())?;
        }
        for line in lines {
            self.out.write_all(b"\r\n")?;
            self.out.write_all(line.as_bytes())?;
        }
        self.out.flush()?;

        let height = text.split('\n').count();
        tracing::trace!(previous = self.previous_height, height, "repainted");
        self.previous_height = height;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
