//! Full-frame assertions: the renderer's single output buffer contains the
//! expected escape sequences and text for representative states.

use core_render::{Renderer, clear_screen, scroll};
use core_state::{EditorState, StatusMessage, Viewport};
use core_text::{DEFAULT_TAB_STOP, Document};
use std::time::{Duration, Instant};

const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
const REVERSE_ON: &[u8] = b"\x1b[7m";

fn state(bytes: &[u8], rows: usize, cols: usize) -> EditorState {
    EditorState::new(
        Document::from_bytes(bytes, DEFAULT_TAB_STOP),
        Viewport::new(rows, cols),
        3,
    )
}

fn draw(state: &mut EditorState, now: Instant) -> Vec<u8> {
    scroll(state);
    let mut out = Vec::new();
    Renderer::new()
        .draw(state, now, &mut out)
        .expect("draw into a Vec cannot fail");
    out
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn frame_brackets_cursor_visibility() {
    let mut st = state(b"hello", 4, 20);
    let frame = draw(&mut st, Instant::now());
    assert!(frame.starts_with(HIDE_CURSOR), "frame hides the cursor first");
    assert!(frame.ends_with(SHOW_CURSOR), "frame shows the cursor last");
}

#[test]
fn document_rows_and_continuation_markers() {
    let mut st = state(b"alpha\nbeta", 4, 20);
    let frame = draw(&mut st, Instant::now());
    assert!(contains(&frame, b"alpha"));
    assert!(contains(&frame, b"beta"));
    assert!(contains(&frame, b"~"), "rows past the document show a marker");
}

#[test]
fn empty_document_shows_centered_banner() {
    let mut st = state(b"", 9, 60);
    let frame = draw(&mut st, Instant::now());
    assert!(contains(&frame, b"femto editor -- version"));
}

#[test]
fn nonempty_document_has_no_banner() {
    let mut st = state(b"x", 9, 60);
    let frame = draw(&mut st, Instant::now());
    assert!(!contains(&frame, b"femto editor"));
}

#[test]
fn banner_truncates_on_narrow_viewport() {
    let mut st = state(b"", 9, 10);
    let frame = draw(&mut st, Instant::now());
    assert!(contains(&frame, b"femto edit"));
    assert!(!contains(&frame, b"femto edito"));
}

#[test]
fn status_bar_is_reverse_video_with_placeholder_name() {
    let mut st = state(b"one\ntwo", 4, 40);
    let frame = draw(&mut st, Instant::now());
    assert!(contains(&frame, REVERSE_ON));
    assert!(contains(&frame, b"[No Name] - 2 lines (1/2)"));
}

#[test]
fn long_rows_clip_to_viewport_width() {
    let long = "abcdefghijklmnopqrstuvwxyz";
    let mut st = state(long.as_bytes(), 4, 10);
    let frame = draw(&mut st, Instant::now());
    assert!(contains(&frame, b"abcdefghij"));
    assert!(!contains(&frame, b"abcdefghijk"), "content past the width is clipped");
}

#[test]
fn horizontal_scroll_shows_the_cursor_column() {
    let long = "abcdefghijklmnopqrstuvwxyz";
    let mut st = state(long.as_bytes(), 4, 10);
    st.cursor.cx = 25;
    let frame = draw(&mut st, Instant::now());
    assert!(contains(&frame, b"qrstuvwxyz"), "tail window visible");
    assert!(!contains(&frame, b"abcdef"), "scrolled-out prefix absent");
}

#[test]
fn message_bar_respects_expiry_window() {
    let now = Instant::now();
    let mut st = state(b"content", 4, 40);
    st.status = Some(StatusMessage::at("HELP: Ctrl-S = save", now));

    let fresh = draw(&mut st, now + Duration::from_secs(1));
    assert!(contains(&fresh, b"HELP: Ctrl-S = save"));

    let stale = draw(&mut st, now + Duration::from_secs(6));
    assert!(!contains(&stale, b"HELP"), "expired message no longer drawn");
}

#[test]
fn cursor_is_positioned_at_render_coordinates() {
    let mut st = state(b"\tabc", 4, 40);
    st.cursor.cx = 1; // after the tab: render column 8
    let frame = draw(&mut st, Instant::now());
    // 1-based escape coordinates: row 1, column 9.
    assert!(contains(&frame, b"\x1b[1;9H"));
}

#[test]
fn clear_screen_emits_full_erase_and_home() {
    let mut out = Vec::new();
    clear_screen(&mut out).unwrap();
    assert!(contains(&out, b"\x1b[2J"));
    assert!(contains(&out, b"\x1b[1;1H"));
}
