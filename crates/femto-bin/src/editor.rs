//! The interactive session: control loop, file I/O and the save-as prompt.
//!
//! `Editor` is generic over its byte source and its output sink so the whole
//! session can be driven by scripted input and captured frames in tests; the
//! binary instantiates it with the stdin pump and stdout. One iteration is
//! always scroll -> draw -> decode -> dispatch, the single synchronous loop
//! the editor is built around.
//!
//! Save failures are the recoverable error tier: they become a status
//! message and leave the document (and its dirty counter) untouched so the
//! user can retry. Errors returned from `run` itself are fatal plumbing
//! failures (terminal gone, stdin closed).

use anyhow::{Context, Result};
use core_actions::{Directive, dispatch};
use core_events::{BACKSPACE, ByteSource, EditAction, Key, ctrl};
use core_input::KeyDecoder;
use core_render::{Renderer, clear_screen, scroll};
use core_state::EditorState;
use core_text::Document;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

pub struct Editor<S, W> {
    state: EditorState,
    decoder: KeyDecoder<S>,
    renderer: Renderer,
    out: W,
}

impl<S: ByteSource, W: Write> Editor<S, W> {
    pub fn new(state: EditorState, decoder: KeyDecoder<S>, out: W) -> Self {
        Self {
            state,
            decoder,
            renderer: Renderer::new(),
            out,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh()?;
            let key = self.decoder.next_key()?;
            match dispatch(key, &mut self.state) {
                Directive::Continue => {}
                Directive::Save => self.save()?,
                Directive::Quit => break,
            }
        }
        info!(target: "runtime", "clean exit");
        clear_screen(&mut self.out)?;
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        scroll(&mut self.state);
        self.renderer
            .draw(&self.state, Instant::now(), &mut self.out)?;
        Ok(())
    }

    /// Write the document to its file, prompting for a name first when the
    /// buffer has none.
    fn save(&mut self) -> Result<()> {
        if self.state.document.file_name().is_none() {
            match self.prompt("Save as: ")? {
                Some(name) => self.state.document.set_file_name(name),
                None => {
                    self.state.set_status("Save aborted");
                    return Ok(());
                }
            }
        }
        let Some(path) = self.state.document.file_name().map(Path::to_path_buf) else {
            return Ok(());
        };

        let bytes = self.state.document.serialize();
        match fs::write(&path, &bytes) {
            Ok(()) => {
                self.state.document.mark_saved();
                self.state
                    .set_status(format!("{} bytes written to disk", bytes.len()));
                info!(target: "io", path = %path.display(), size_bytes = bytes.len(), "file saved");
            }
            Err(e) => {
                warn!(target: "io", path = %path.display(), ?e, "save failed");
                self.state
                    .set_status(format!("Can't save! I/O error: {e}"));
            }
        }
        Ok(())
    }

    /// Modal one-line input on the status bar, driven by the same decoder
    /// and renderer as the main loop.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut input = String::new();
        loop {
            self.state.set_status(format!("{prompt}{input}"));
            self.refresh()?;
            match self.decoder.next_key()? {
                Key::Edit(EditAction::DeleteForward) | Key::Literal(BACKSPACE) => {
                    input.pop();
                }
                Key::Literal(b) if b == ctrl(b'h') => {
                    input.pop();
                }
                Key::Escape => {
                    self.state.clear_status();
                    return Ok(None);
                }
                Key::Literal(b'\r') => {
                    if !input.is_empty() {
                        self.state.clear_status();
                        return Ok(Some(input));
                    }
                }
                Key::Literal(b) if b.is_ascii() && !b.is_ascii_control() => {
                    input.push(b as char);
                }
                _ => {}
            }
        }
    }

    #[cfg(test)]
    fn state(&self) -> &EditorState {
        &self.state
    }
}

/// Load the named file as the initial document. A missing or unreadable
/// file at startup is fatal, matching the editor's historical behavior.
pub fn open_document(path: &Path, tab_stop: usize) -> Result<Document> {
    let bytes =
        fs::read(path).with_context(|| format!("could not open {}", path.display()))?;
    info!(target: "io", path = %path.display(), size_bytes = bytes.len(), "file read");
    let mut doc = Document::from_bytes(&bytes, tab_stop);
    doc.set_file_name(path);
    Ok(doc)
}
