#![allow(dead_code)] // Shared across integration tests; each binary uses a subset.

use core_state::{EditorState, Viewport};
use core_text::{DEFAULT_TAB_STOP, Document};

pub const TEST_VIEW_ROWS: usize = 10;

/// Editor state over the given serialized content, 10x40 viewport, default
/// quit confirmation count.
pub fn state_from(bytes: &[u8]) -> EditorState {
    EditorState::new(
        Document::from_bytes(bytes, DEFAULT_TAB_STOP),
        Viewport::new(TEST_VIEW_ROWS, 40),
        3,
    )
}

/// A row's raw content as an owned `Vec` for assertion convenience.
pub fn row_bytes(state: &EditorState, at: usize) -> Vec<u8> {
    state
        .document
        .row(at)
        .map(|r| r.chars().to_vec())
        .unwrap_or_default()
}
