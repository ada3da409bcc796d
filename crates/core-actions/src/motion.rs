//! Cursor motion: bounded multi-step moves and single-step moves with line
//! wrapping.
//!
//! Two layers on purpose. [`move_cursor_by`] is pure clamped arithmetic used
//! by page motions; [`move_cursor`] adds the line-boundary crossing a user
//! expects from a single arrow press. Every vertical move ends with a column
//! re-clamp so the cursor can never point past a shorter line.

use core_events::Direction;
use core_state::EditorState;

/// Move `count` steps in one direction, clamped to document bounds.
pub fn move_cursor_by(state: &mut EditorState, dir: Direction, count: usize) {
    let cursor = &mut state.cursor;
    match dir {
        Direction::Left => {
            cursor.cx = cursor.cx.saturating_sub(count);
        }
        Direction::Right => {
            if let Some(row) = state.document.row(cursor.cy) {
                cursor.cx = (cursor.cx + count).min(row.len());
            }
        }
        Direction::Up => {
            cursor.cy = cursor.cy.saturating_sub(count);
            state.clamp_cx();
        }
        Direction::Down => {
            cursor.cy = (cursor.cy + count).min(state.document.rows());
            state.clamp_cx();
        }
    }
}

/// Single-step move with wrapping at line boundaries.
pub fn move_cursor(state: &mut EditorState, dir: Direction) {
    let at_line_end = state
        .current_row()
        .is_some_and(|row| state.cursor.cx == row.len());
    match dir {
        Direction::Left if state.cursor.cx == 0 && state.cursor.cy > 0 => {
            state.cursor.cy -= 1;
            state.cursor.cx = state.current_row_len();
        }
        // Wrapping right stops short of the virtual append row.
        Direction::Right
            if at_line_end && state.cursor.cy != state.document.rows().saturating_sub(1) =>
        {
            state.cursor.cy += 1;
            state.cursor.cx = 0;
        }
        _ => move_cursor_by(state, dir, 1),
    }
    state.clamp_cx();
}

/// Move one screenful, leaving one row of overlap.
pub fn page_move(state: &mut EditorState, dir: Direction) {
    let times = state.viewport.rows.saturating_sub(1);
    move_cursor_by(state, dir, times);
}

pub fn line_start(state: &mut EditorState) {
    state.cursor.cx = 0;
}

pub fn line_end(state: &mut EditorState) {
    if state.cursor.cy < state.document.rows() {
        state.cursor.cx = state.current_row_len();
    }
}
