//! Terminal key decoding: raw bytes in, one logical [`Key`] out per call.
//!
//! The decoder blocks (by re-polling the bounded-wait source) until a full
//! key is resolved. Escape handling mirrors the terminal's own ambiguity: a
//! lone `ESC` and an `ESC` whose sequence never arrives are indistinguishable
//! except by time, so a timed-out read inside a sequence yields a literal
//! [`Key::Escape`] and is never reinterpreted later.
//!
//! Fallback policy for unrecognized sequences: the leading escape is
//! reported and any bytes already consumed are dropped, not re-queued. A
//! partially matched unknown sequence therefore loses its tail. That is the
//! documented behavior of this decoder, kept deliberately simple rather than
//! buffering lookahead.

use core_events::{ByteSource, EditAction, Key, Navigate, QUIT_KEY};
use std::io;

const ESC: u8 = 0x1b;

/// Streaming decoder over any [`ByteSource`].
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Block until one logical key is available.
    pub fn next_key(&mut self) -> io::Result<Key> {
        let byte = self.next_byte()?;
        match byte {
            QUIT_KEY => Ok(Key::Quit),
            ESC => self.decode_escape(),
            b => Ok(Key::Literal(b)),
        }
    }

    /// Re-poll the source until a byte arrives.
    fn next_byte(&mut self) -> io::Result<u8> {
        loop {
            if let Some(b) = self.source.read_byte()? {
                return Ok(b);
            }
        }
    }

    /// Resolve the bytes after an `ESC`. Both follow-up reads share the
    /// source's bounded wait; either timing out means the escape stood
    /// alone.
    fn decode_escape(&mut self) -> io::Result<Key> {
        let Some(b0) = self.source.read_byte()? else {
            return Ok(Key::Escape);
        };
        let Some(b1) = self.source.read_byte()? else {
            return Ok(Key::Escape);
        };
        if b0 != b'[' {
            // Unknown introducer; b1 is already consumed and dropped.
            tracing::trace!(target: "input.decode", b0, b1, "unrecognized escape introducer");
            return Ok(Key::Escape);
        }
        match b1 {
            b'0'..=b'9' => {
                let Some(b2) = self.source.read_byte()? else {
                    return Ok(Key::Escape);
                };
                if b2 != b'~' {
                    tracing::trace!(target: "input.decode", b1, b2, "unterminated vt sequence");
                    return Ok(Key::Escape);
                }
                Ok(match b1 {
                    b'1' | b'7' => Key::Navigate(Navigate::LineStart),
                    b'4' | b'8' => Key::Navigate(Navigate::LineEnd),
                    b'3' => Key::Edit(EditAction::DeleteForward),
                    b'5' => Key::Navigate(Navigate::PageUp),
                    b'6' => Key::Navigate(Navigate::PageDown),
                    _ => {
                        tracing::trace!(target: "input.decode", b1, "unknown vt keycode");
                        Key::Escape
                    }
                })
            }
            b'A' => Ok(Key::Navigate(Navigate::Up)),
            b'B' => Ok(Key::Navigate(Navigate::Down)),
            b'C' => Ok(Key::Navigate(Navigate::Right)),
            b'D' => Ok(Key::Navigate(Navigate::Left)),
            b'H' => Ok(Key::Navigate(Navigate::LineStart)),
            b'F' => Ok(Key::Navigate(Navigate::LineEnd)),
            other => {
                tracing::trace!(target: "input.decode", final_byte = other, "unknown csi final byte");
                Ok(Key::Escape)
            }
        }
    }
}
