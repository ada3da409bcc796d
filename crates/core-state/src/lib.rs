//! Editor session state: document, cursor, viewport and status metadata.
//!
//! One [`EditorState`] value is the whole editing session. It is owned by the
//! control loop and passed by mutable reference to every operation; there are
//! no ambient globals. The dispatcher (`core-actions`) mutates it, the scroll
//! and render layers (`core-render`) read it (scroll adjusts only the
//! viewport offsets and the derived render column).
//!
//! Cursor invariants (hold after every dispatched key):
//! * `0 <= cy <= document.rows()`; `cy == rows()` is the virtual append row.
//! * `0 <= cx <= row(cy).len()`, and `cx == 0` on the virtual row.
//! * `rx >= cx`, equal exactly when no tab precedes `cx` on the row.

use core_text::{Document, Row};
use std::time::{Duration, Instant};

/// How long a status message stays visible. Checked lazily at render time,
/// so with no further input a message can outlive this window on screen.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Fixed capacity of the status line buffer; longer messages truncate.
pub const STATUS_MESSAGE_MAX: usize = 80;

/// Logical cursor position. `cx`/`cy` index raw content; `rx` is the derived
/// render column, recomputed by the scroll pass before every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
    pub rx: usize,
}

/// The visible window into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub row_off: usize,
    pub col_off: usize,
    /// Text rows available for document content (status and message bars
    /// already excluded).
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_off: 0,
            col_off: 0,
            rows,
            cols,
        }
    }
}

/// A transient status line message with its creation time.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    text: String,
    since: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, Instant::now())
    }

    /// Construct with an explicit timestamp (tests drive expiry this way).
    pub fn at(text: impl Into<String>, since: Instant) -> Self {
        let mut text = text.into();
        truncate_to(&mut text, STATUS_MESSAGE_MAX);
        Self { text, since }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.since) < STATUS_MESSAGE_TTL
    }
}

/// Truncate without panicking on a non-boundary index.
fn truncate_to(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub status: Option<StatusMessage>,
    /// Remaining quit presses once the unsaved-changes countdown is armed.
    /// `None` while editing normally; any non-quit key disarms it.
    pub quit_pending: Option<u32>,
    /// Total quit presses required to discard a dirty document.
    pub quit_confirm: u32,
}

impl EditorState {
    pub fn new(document: Document, viewport: Viewport, quit_confirm: u32) -> Self {
        Self {
            document,
            cursor: Cursor::default(),
            viewport,
            status: None,
            quit_pending: None,
            quit_confirm,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(text));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// The row under the cursor, `None` on the virtual append row.
    pub fn current_row(&self) -> Option<&Row> {
        self.document.row(self.cursor.cy)
    }

    pub fn current_row_len(&self) -> usize {
        self.current_row().map_or(0, Row::len)
    }

    /// Shrink `cx` onto the current row. The rule that keeps the cursor from
    /// pointing past a shorter line after any vertical move.
    pub fn clamp_cx(&mut self) {
        let len = self.current_row_len();
        if self.cursor.cx > len {
            self.cursor.cx = len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::DEFAULT_TAB_STOP;

    fn state(bytes: &[u8]) -> EditorState {
        EditorState::new(
            Document::from_bytes(bytes, DEFAULT_TAB_STOP),
            Viewport::new(10, 40),
            3,
        )
    }

    #[test]
    fn clamp_cx_shrinks_onto_shorter_row() {
        let mut st = state(b"longer line\nab");
        st.cursor.cy = 1;
        st.cursor.cx = 11;
        st.clamp_cx();
        assert_eq!(st.cursor.cx, 2);
    }

    #[test]
    fn clamp_cx_on_virtual_row_is_zero() {
        let mut st = state(b"ab");
        st.cursor.cy = st.document.rows();
        st.cursor.cx = 2;
        st.clamp_cx();
        assert_eq!(st.cursor.cx, 0);
    }

    #[test]
    fn status_message_expires_after_ttl() {
        let now = Instant::now();
        let msg = StatusMessage::at("hello", now);
        assert!(msg.is_visible_at(now));
        assert!(msg.is_visible_at(now + Duration::from_secs(4)));
        assert!(!msg.is_visible_at(now + Duration::from_secs(5)));
    }

    #[test]
    fn status_message_truncates_at_capacity() {
        let long = "x".repeat(STATUS_MESSAGE_MAX + 40);
        let msg = StatusMessage::new(long);
        assert_eq!(msg.text().len(), STATUS_MESSAGE_MAX);
    }
}
