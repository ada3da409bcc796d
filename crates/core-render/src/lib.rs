//! Frame assembly: compose one complete frame into a reusable buffer and
//! emit it with a single write.
//!
//! Per frame: hide cursor, home, the visible document rows (each followed by
//! erase-to-end-of-line), the reverse-video status bar, the message bar,
//! then the terminal cursor parked at the editor cursor's render position
//! and shown again. Buffering the whole frame and flushing once is what
//! prevents visible tearing; nothing here performs partial writes.
//!
//! The renderer reads state immutably. The scroll recompute
//! ([`scroll::scroll`]) runs in the control loop before each draw.

mod scroll;
mod status;

pub use scroll::scroll;
pub use status::{NO_NAME, status_line};

use core_state::EditorState;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::time::Instant;

const WELCOME: &str = concat!("femto editor -- version ", env!("CARGO_PKG_VERSION"));

/// Frame composer with a buffer reused across frames.
#[derive(Debug, Default)]
pub struct Renderer {
    frame: Vec<u8>,
}

impl Renderer {
    pub fn new() -> Self {
        Self { frame: Vec::new() }
    }

    /// Compose and emit one frame. `now` drives message-bar expiry; it is a
    /// parameter so tests (and the prompt loop) control time explicitly.
    pub fn draw<W: Write>(
        &mut self,
        state: &EditorState,
        now: Instant,
        out: &mut W,
    ) -> io::Result<()> {
        self.frame.clear();
        queue!(self.frame, Hide, MoveTo(0, 0))?;
        self.draw_rows(state)?;
        self.draw_status_bar(state)?;
        self.draw_message_bar(state, now)?;

        // Saturating: containment only holds for viewports of at least one
        // cell per axis, and a degenerate terminal must not panic the draw.
        let y = state.cursor.cy.saturating_sub(state.viewport.row_off) as u16;
        let x = state.cursor.rx.saturating_sub(state.viewport.col_off) as u16;
        queue!(self.frame, MoveTo(x, y), Show)?;

        out.write_all(&self.frame)?;
        out.flush()
    }

    fn draw_rows(&mut self, state: &EditorState) -> io::Result<()> {
        let vp = &state.viewport;
        for y in 0..vp.rows {
            let file_row = y + vp.row_off;
            match state.document.row(file_row) {
                Some(row) => {
                    let render = row.render();
                    let start = vp.col_off.min(render.len());
                    let end = (vp.col_off + vp.cols).min(render.len());
                    self.frame.extend_from_slice(&render[start..end]);
                }
                None if state.document.rows() == 0 && y == vp.rows / 3 => {
                    self.draw_welcome(vp.cols);
                }
                None => self.frame.push(b'~'),
            }
            queue!(self.frame, Clear(ClearType::UntilNewLine))?;
            self.frame.extend_from_slice(b"\r\n");
        }
        Ok(())
    }

    fn draw_welcome(&mut self, cols: usize) {
        let banner = &WELCOME[..WELCOME.len().min(cols)];
        let mut padding = (cols - banner.len()) / 2;
        if padding > 0 {
            self.frame.push(b'~');
            padding -= 1;
        }
        self.frame.extend(std::iter::repeat_n(b' ', padding));
        self.frame.extend_from_slice(banner.as_bytes());
    }

    fn draw_status_bar(&mut self, state: &EditorState) -> io::Result<()> {
        queue!(self.frame, SetAttribute(Attribute::Reverse))?;
        let text = status_line(state);
        let shown: String = text.chars().take(state.viewport.cols).collect();
        self.frame.extend_from_slice(shown.as_bytes());
        // Pad to full width so the reverse band spans the line.
        self.frame
            .extend(std::iter::repeat_n(b' ', state.viewport.cols.saturating_sub(shown.chars().count())));
        queue!(self.frame, SetAttribute(Attribute::Reset))?;
        self.frame.extend_from_slice(b"\r\n");
        Ok(())
    }

    fn draw_message_bar(&mut self, state: &EditorState, now: Instant) -> io::Result<()> {
        queue!(self.frame, Clear(ClearType::UntilNewLine))?;
        if let Some(msg) = &state.status
            && msg.is_visible_at(now)
        {
            let shown: String = msg.text().chars().take(state.viewport.cols).collect();
            self.frame.extend_from_slice(shown.as_bytes());
        }
        Ok(())
    }
}

/// Wipe the screen and home the cursor. Used on normal quit and on the
/// fatal-error path before the message is printed.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}
