//! Viewport scrolling: a pure, edge-triggered recompute run once per frame.
//!
//! Offsets move only as far as needed to bring the cursor back inside the
//! viewport rectangle; they never re-center. The leftward column clamp uses
//! the *raw* column, an inherited quirk kept for behavioral compatibility
//! (it still satisfies the containment invariant because `rx >= cx`).

use core_state::EditorState;

/// Recompute the derived render column and both viewport offsets from the
/// cursor position. After this returns (with a viewport of at least one
/// cell per axis), `(cy, rx)` lies inside the viewport rectangle.
pub fn scroll(state: &mut EditorState) {
    let tab_stop = state.document.tab_stop();
    state.cursor.rx = state
        .current_row()
        .map_or(0, |row| row.cx_to_rx(state.cursor.cx, tab_stop));

    let (cx, cy, rx) = (state.cursor.cx, state.cursor.cy, state.cursor.rx);
    let vp = &mut state.viewport;
    let before = (vp.row_off, vp.col_off);

    if rx < vp.col_off {
        vp.col_off = cx;
    }
    if rx >= vp.col_off + vp.cols {
        vp.col_off = rx + 1 - vp.cols;
    }
    if cy < vp.row_off {
        vp.row_off = cy;
    }
    if cy >= vp.row_off + vp.rows {
        vp.row_off = cy + 1 - vp.rows;
    }

    if before != (vp.row_off, vp.col_off) {
        tracing::trace!(
            target: "render",
            row_off = vp.row_off,
            col_off = vp.col_off,
            cy,
            rx,
            "viewport scrolled"
        );
    }
}
