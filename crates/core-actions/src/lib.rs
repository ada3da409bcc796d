//! Key dispatch: apply one logical [`Key`] to the editor state.
//!
//! The dispatcher is the only place key meaning is decided. It returns a
//! [`Directive`] telling the control loop what, if anything, to do beyond
//! the state mutation: nothing, run a save, or exit. File I/O and the save
//! prompt stay in the binary; this crate never touches the filesystem or
//! the terminal.
//!
//! Quit confirmation is a counted sub-state: a quit key on a dirty document
//! arms a countdown of further quit presses; any other key disarms it.
//! Exhausting the countdown is the only way to discard unsaved changes.

mod edit;
mod motion;

pub use edit::{delete_char, insert_char, insert_newline};
pub use motion::{line_end, line_start, move_cursor, move_cursor_by, page_move};

use core_events::{BACKSPACE, Direction, EditAction, Key, Navigate, ctrl};
use core_state::EditorState;

/// What the control loop must do after a key has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Continue,
    Save,
    Quit,
}

pub fn dispatch(key: Key, state: &mut EditorState) -> Directive {
    if key == Key::Quit {
        return handle_quit(state);
    }
    // Any non-quit key resets the pending quit confirmation.
    state.quit_pending = None;

    match key {
        Key::Literal(b'\r') => insert_newline(state),
        Key::Literal(b) if b == ctrl(b's') => return Directive::Save,
        Key::Navigate(nav) => navigate(state, nav),
        Key::Edit(EditAction::DeleteForward) => {
            move_cursor(state, Direction::Right);
            delete_char(state);
        }
        Key::Literal(BACKSPACE) => delete_char(state),
        Key::Literal(b) if b == ctrl(b'h') => delete_char(state),
        // Ctrl-L historically forced a repaint; every key repaints now.
        Key::Literal(b) if b == ctrl(b'l') => {}
        Key::Escape => {}
        Key::Literal(b) => insert_char(state, b),
        Key::Quit => unreachable!("handled above"),
    }
    Directive::Continue
}

fn navigate(state: &mut EditorState, nav: Navigate) {
    match nav {
        Navigate::Up => move_cursor(state, Direction::Up),
        Navigate::Down => move_cursor(state, Direction::Down),
        Navigate::Left => move_cursor(state, Direction::Left),
        Navigate::Right => move_cursor(state, Direction::Right),
        Navigate::PageUp => page_move(state, Direction::Up),
        Navigate::PageDown => page_move(state, Direction::Down),
        Navigate::LineStart => line_start(state),
        Navigate::LineEnd => line_end(state),
    }
}

fn handle_quit(state: &mut EditorState) -> Directive {
    if !state.document.is_dirty() {
        return Directive::Quit;
    }
    let remaining = state.quit_pending.unwrap_or(state.quit_confirm);
    if remaining <= 1 {
        tracing::info!(target: "actions.dispatch", "quit with unsaved changes confirmed");
        return Directive::Quit;
    }
    let remaining = remaining - 1;
    state.quit_pending = Some(remaining);
    state.set_status(format!(
        "WARNING! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
    ));
    Directive::Continue
}
