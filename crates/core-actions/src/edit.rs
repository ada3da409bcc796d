//! Text edits: character insert, newline split, backward delete with row
//! merge.
//!
//! Each function here is one logical edit and contributes exactly one dirty
//! increment, whether it lands on the document's structural operations
//! (which count themselves) or on a character edit (counted via
//! `mark_dirty`).

use core_state::EditorState;

/// Insert one byte at the cursor, creating the row first when the cursor
/// sits on the virtual append row.
pub fn insert_char(state: &mut EditorState, byte: u8) {
    let cy = state.cursor.cy;
    if cy == state.document.rows() {
        state.document.insert_row(cy, b"");
    } else {
        state.document.mark_dirty();
    }
    state.document.insert_char(cy, state.cursor.cx, byte);
    state.cursor.cx += 1;
    tracing::trace!(target: "actions.dispatch", op = "insert_char", cy, cx = state.cursor.cx, "edit");
}

/// Split the current row at the cursor; an edit at column 0 just slides an
/// empty row in above. The cursor lands at column 0 of the lower half.
pub fn insert_newline(state: &mut EditorState) {
    let (cx, cy) = (state.cursor.cx, state.cursor.cy);
    if cx == 0 {
        state.document.insert_row(cy, b"");
    } else if let Some(row) = state.document.row(cy) {
        let tail = row.chars()[cx..].to_vec();
        state.document.insert_row(cy + 1, &tail);
        state.document.truncate_row(cy, cx);
    } else {
        // Virtual append row with cx somehow nonzero cannot happen; the
        // clamp invariant pins cx to 0 there. Treat as the column-0 case.
        state.document.insert_row(cy, b"");
    }
    state.cursor.cy += 1;
    state.cursor.cx = 0;
    tracing::trace!(target: "actions.dispatch", op = "insert_newline", cy, cx, "edit");
}

/// Delete the byte before the cursor. At column 0 of a non-first row this
/// merges the row into its predecessor; at the very start of the document
/// and on the virtual append row it is a no-op.
pub fn delete_char(state: &mut EditorState) {
    let (cx, cy) = (state.cursor.cx, state.cursor.cy);
    if cy == state.document.rows() {
        return;
    }
    if cx == 0 && cy == 0 {
        return;
    }
    if cx > 0 {
        state.document.delete_char(cy, cx - 1);
        state.document.mark_dirty();
        state.cursor.cx -= 1;
    } else {
        let prev_len = state.document.row(cy - 1).map_or(0, |r| r.len());
        let remainder = state
            .document
            .row(cy)
            .map_or_else(Vec::new, |r| r.chars().to_vec());
        state.document.append_bytes(cy - 1, &remainder);
        state.document.delete_row(cy);
        state.cursor.cy -= 1;
        state.cursor.cx = prev_len;
    }
    tracing::trace!(target: "actions.dispatch", op = "delete_char", cy, cx, "edit");
}
