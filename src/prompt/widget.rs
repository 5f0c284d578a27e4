//! The widget contract and shared pagination state.
//!
//! A widget is a small state machine: it renders itself to a string,
//! consumes one [`Event`] at a time, and eventually stops interacting.
//! The session loop only ever talks to this trait.

use crate::types::Event;

// ============================================================================
// WIDGET
// ============================================================================

/// One interactive prompt.
pub trait Widget {
    /// What the prompt yields once finished.
    type Output;

    /// Current view. A pure function of state: calling it twice without an
    /// intervening [`Widget::on_event`] gives the same string.
    fn render(&self) -> String;

    /// True until a terminating event has been accepted.
    fn is_interacting(&self) -> bool;

    /// Apply one event.
    fn on_event(&mut self, event: Event);

    /// The answer. Meaningful after interaction ends, but always defined:
    /// before that it reflects the current state or the configured default.
    fn value(&self) -> Self::Output;
}

// ============================================================================
// PAGER
// ============================================================================

/// Cursor and pagination window over `len` rows.
///
/// Invariant, after every move:
/// `start <= cursor <= start + page_size - 1` and `cursor < len`
/// (when `len > 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    cursor: usize,
    start: usize,
    page_size: usize,
    len: usize,
}

impl Pager {
    /// Cursor at the top. A `page_size` of 0 is raised to 1; widgets
    /// reject it earlier with [`crate::Error::ZeroPageSize`].
    pub fn new(len: usize, page_size: usize) -> Self {
        Pager {
            cursor: 0,
            start: 0,
            page_size: page_size.max(1),
            len,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible row.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether some rows are hidden.
    pub fn is_paginated(&self) -> bool {
        self.page_size < self.len
    }

    /// Whether row `index` falls inside the window.
    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.start && index < self.start.saturating_add(self.page_size)
    }

    /// Last row inside the window.
    fn window_end(&self) -> usize {
        self.start.saturating_add(self.page_size - 1)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        if self.cursor < self.start {
            self.start = self.start.saturating_sub(1);
        }
    }

    pub fn move_down(&mut self) {
        if self.len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1).min(self.len - 1);
        if self.cursor > self.window_end() {
            self.start = (self.start + 1).min(self.len - 1);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_window_holds(pager: &Pager) {
        if pager.is_empty() {
            return;
        }
        assert!(pager.cursor() < pager.len(), "{pager:?}");
        assert!(pager.start() <= pager.cursor(), "{pager:?}");
        assert!(pager.cursor() <= pager.start() + pager.page_size() - 1, "{pager:?}");
    }

    /// Every Up/Down sequence of length `depth`, as bit patterns.
    fn all_sequences(depth: u32) -> impl Iterator<Item = Vec<bool>> {
        (0..1u32 << depth).map(move |bits| (0..depth).map(|i| bits & (1 << i) != 0).collect())
    }

    #[test]
    fn starts_at_top() {
        let pager = Pager::new(5, 2);
        assert_eq!((pager.cursor(), pager.start()), (0, 0));
        assert!(pager.is_paginated());
    }

    #[test]
    fn down_scrolls_one_row_at_a_time() {
        let mut pager = Pager::new(4, 2);
        pager.move_down();
        assert_eq!((pager.cursor(), pager.start()), (1, 0));
        pager.move_down();
        assert_eq!((pager.cursor(), pager.start()), (2, 1));
        pager.move_down();
        assert_eq!((pager.cursor(), pager.start()), (3, 2));
    }

    #[test]
    fn clamps_at_both_ends() {
        let mut pager = Pager::new(3, 2);
        pager.move_up();
        assert_eq!(pager.cursor(), 0);
        for _ in 0..10 {
            pager.move_down();
        }
        assert_eq!((pager.cursor(), pager.start()), (2, 1));
    }

    #[test]
    fn up_scrolls_back() {
        let mut pager = Pager::new(4, 2);
        for _ in 0..4 {
            pager.move_down();
        }
        for _ in 0..5 {
            pager.move_up();
        }
        assert_eq!((pager.cursor(), pager.start()), (0, 0));
    }

    #[test]
    fn unbounded_page_never_scrolls() {
        let mut pager = Pager::new(50, usize::MAX);
        for _ in 0..60 {
            pager.move_down();
        }
        assert_eq!((pager.cursor(), pager.start()), (49, 0));
        assert!(!pager.is_paginated());
        assert!(pager.is_visible(49));
    }

    #[test]
    fn visibility_matches_window() {
        let mut pager = Pager::new(5, 2);
        pager.move_down();
        pager.move_down();
        let visible: Vec<usize> = (0..5).filter(|&i| pager.is_visible(i)).collect();
        assert_eq!(visible, vec![1, 2]);
    }

    #[test]
    fn zero_page_size_becomes_one_row() {
        let mut pager = Pager::new(3, 0);
        assert_eq!(pager.page_size(), 1);
        for _ in 0..4 {
            pager.move_down();
            assert_window_holds(&pager);
        }
        assert_eq!((pager.cursor(), pager.start()), (2, 2));
        assert!(pager.is_visible(2));
        assert!(!pager.is_visible(1));
    }

    #[test]
    fn empty_pager_ignores_moves() {
        let mut pager = Pager::new(0, 3);
        pager.move_down();
        pager.move_up();
        assert_eq!((pager.cursor(), pager.start()), (0, 0));
    }

    #[test]
    fn window_invariant_holds_for_every_sequence() {
        for (len, page) in [(1, 1), (4, 2), (5, 3), (6, 1), (3, 10)] {
            for sequence in all_sequences(10) {
                let mut pager = Pager::new(len, page);
                for down in sequence {
                    if down {
                        pager.move_down();
                    } else {
                        pager.move_up();
                    }
                    assert_window_holds(&pager);
                }
            }
        }
    }
}
