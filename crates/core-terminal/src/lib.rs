//! Terminal plumbing: raw mode lifecycle, the stdin byte transport and the
//! viewport size query.
//!
//! Everything here is the "external collaborator" side of the editor: the
//! core only ever sees the [`ByteSource`] contract and a `(rows, cols)`
//! pair. Failures in this crate are the fatal tier (an editor cannot run
//! without raw mode or a known viewport) and surface as [`TerminalError`]
//! so the binary can restore the screen before exiting.

use core_events::ByteSource;
use crossbeam_channel::{Receiver, RecvTimeoutError, bounded};
use std::io::{self, Read, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Bounded wait for a single input byte. Matches the tenth-of-a-second
/// granularity the raw-mode VTIME setting traditionally gave this editor.
pub const READ_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to toggle raw mode: {0}")]
    RawMode(#[source] io::Error),
    #[error("could not determine terminal size: {0}")]
    WindowSize(#[source] io::Error),
    #[error("cursor position probe produced no parsable report")]
    SizeProbe,
}

/// RAII raw-mode guard: enables on construction, restores the original mode
/// on drop (including unwinds), so an early return can never leave the
/// user's shell in raw mode.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn enable() -> Result<Self, TerminalError> {
        crossterm::terminal::enable_raw_mode().map_err(TerminalError::RawMode)?;
        Ok(Self { active: true })
    }

    pub fn restore(&mut self) {
        if self.active {
            if let Err(e) = crossterm::terminal::disable_raw_mode() {
                tracing::warn!(target: "runtime", ?e, "raw mode restore failed");
            }
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Stdin as a [`ByteSource`].
///
/// A pump thread performs the blocking one-byte reads and feeds a bounded
/// channel; `read_byte` then waits at most [`READ_TIMEOUT`] on the channel.
/// The editing core stays a single synchronous loop; the pump exists only
/// because a blocking stdin read cannot otherwise be given a deadline.
#[derive(Debug)]
pub struct StdinSource {
    rx: Receiver<u8>,
    timeout: Duration,
}

impl StdinSource {
    pub fn spawn() -> io::Result<Self> {
        let (tx, rx) = bounded::<u8>(1024);
        // Detached on purpose: the pump exits on its own when stdin closes
        // or the receiving side is dropped.
        let _pump = thread::Builder::new()
            .name("stdin-pump".into())
            .spawn(move || {
                let mut stdin = io::stdin().lock();
                let mut buf = [0u8; 1];
                loop {
                    match stdin.read(&mut buf) {
                        Ok(0) => break,
                        Ok(_) => {
                            if tx.send(buf[0]).is_err() {
                                break;
                            }
                        }
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Err(e) => {
                            tracing::warn!(target: "runtime", ?e, "stdin read failed");
                            break;
                        }
                    }
                }
            })?;
        Ok(Self {
            rx,
            timeout: READ_TIMEOUT,
        })
    }
}

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self.rx.recv_timeout(self.timeout) {
            Ok(b) => Ok(Some(b)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )),
        }
    }
}

/// Query the viewport as `(rows, cols)`.
///
/// Primary path is the terminal driver; when it fails or reports a zero
/// width, fall back to the classic probe: push the cursor to the bottom
/// right, ask for a cursor position report, and parse the `ESC [ r ; c R`
/// reply out of the input byte stream.
pub fn viewport_size(input: &mut impl ByteSource) -> Result<(usize, usize), TerminalError> {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 => Ok((rows as usize, cols as usize)),
        Ok(_) => probe_cursor_position(input),
        Err(e) => {
            tracing::debug!(target: "runtime", ?e, "terminal size query failed, probing");
            probe_cursor_position(input)
        }
    }
}

fn probe_cursor_position(input: &mut impl ByteSource) -> Result<(usize, usize), TerminalError> {
    let mut out = io::stdout();
    out.write_all(b"\x1b[999C\x1b[999B\x1b[6n")
        .and_then(|_| out.flush())
        .map_err(TerminalError::WindowSize)?;

    let mut report = Vec::with_capacity(32);
    while report.len() < 32 {
        match input.read_byte().map_err(TerminalError::WindowSize)? {
            Some(b'R') => break,
            Some(b) => report.push(b),
            None => break,
        }
    }
    parse_cursor_report(&report).ok_or(TerminalError::SizeProbe)
}

/// Parse `ESC [ rows ; cols` (terminator already stripped).
fn parse_cursor_report(report: &[u8]) -> Option<(usize, usize)> {
    let body = report.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    let rows = rows.parse().ok()?;
    let cols = cols.parse().ok()?;
    if rows == 0 || cols == 0 {
        return None;
    }
    Some((rows, cols))
}
