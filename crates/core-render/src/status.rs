//! Status line composition.
//!
//! Format: `<name> - <n> lines (<cur>/<n>) [(modified)]`, where `<name>` is
//! the file name capped at 20 characters or `[No Name]` for an unsaved
//! buffer and `<cur>` is the 1-based cursor line. Width truncation happens
//! at the renderer, which knows the viewport.

use core_state::EditorState;

pub const NO_NAME: &str = "[No Name]";

pub fn status_line(state: &EditorState) -> String {
    let name = state
        .document
        .file_name()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| NO_NAME.to_string());
    let modified = if state.document.is_dirty() {
        "(modified)"
    } else {
        ""
    };
    format!(
        "{name:.20} - {rows} lines ({cur}/{rows}) {modified}",
        rows = state.document.rows(),
        cur = state.cursor.cy + 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::{EditorState, Viewport};
    use core_text::{DEFAULT_TAB_STOP, Document};

    fn state(bytes: &[u8]) -> EditorState {
        EditorState::new(
            Document::from_bytes(bytes, DEFAULT_TAB_STOP),
            Viewport::new(10, 40),
            3,
        )
    }

    #[test]
    fn unnamed_clean_buffer() {
        let st = state(b"one\ntwo");
        assert_eq!(status_line(&st), "[No Name] - 2 lines (1/2) ");
    }

    #[test]
    fn named_dirty_buffer_shows_marker() {
        let mut st = state(b"one\ntwo\nthree");
        st.document.set_file_name("notes.txt");
        st.document.mark_dirty();
        st.cursor.cy = 2;
        assert_eq!(status_line(&st), "notes.txt - 3 lines (3/3) (modified)");
    }

    #[test]
    fn long_names_cap_at_twenty_characters() {
        let mut st = state(b"x");
        st.document
            .set_file_name("a-really-long-file-name-that-keeps-going.txt");
        let line = status_line(&st);
        assert!(line.starts_with("a-really-long-file-n "));
    }
}
