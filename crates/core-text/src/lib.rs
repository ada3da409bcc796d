//! Line-oriented document model.
//!
//! A [`Document`] owns an ordered collection of [`Row`]s, a dirty counter
//! (nonzero exactly when unsaved mutations exist), an optional file name and
//! the tab stop used to derive each row's render form. All row mutation goes
//! through the document so the render invariant and dirty accounting cannot
//! be bypassed.
//!
//! Dirty accounting: structural operations (`insert_row`, `delete_row`,
//! `append_bytes`) bump the counter themselves; character-level edits leave
//! it to the edit engine via [`Document::mark_dirty`], so one keystroke is
//! one increment even when it implicitly creates a row first.
//!
//! Out-of-range operations are silent no-ops or clamps, never errors. This
//! permissiveness is part of the observable behavior and is kept exactly.

mod row;
pub use row::Row;

use std::path::{Path, PathBuf};

/// Columns per tab stop when no configuration overrides it.
pub const DEFAULT_TAB_STOP: usize = 8;

#[derive(Debug)]
pub struct Document {
    rows: Vec<Row>,
    dirty: u64,
    file_name: Option<PathBuf>,
    tab_stop: usize,
}

impl Document {
    /// An empty document: no rows, clean.
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            file_name: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build a document from serialized bytes: split at `\n`, strip any
    /// trailing `\r`/`\n` per line, one row per line. The result is clean.
    pub fn from_bytes(bytes: &[u8], tab_stop: usize) -> Self {
        let mut doc = Self::new(tab_stop);
        if bytes.is_empty() {
            return doc;
        }
        for line in bytes.split(|&b| b == b'\n') {
            let mut line = line;
            while let [head @ .., b'\r' | b'\n'] = line {
                line = head;
            }
            doc.rows.push(Row::from_bytes(line, doc.tab_stop));
        }
        // A trailing newline produces one empty split tail, not an extra row.
        if bytes.last() == Some(&b'\n') {
            doc.rows.pop();
        }
        doc.dirty = 0;
        doc
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn set_file_name(&mut self, name: impl Into<PathBuf>) {
        self.file_name = Some(name.into());
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    pub fn dirty(&self) -> u64 {
        self.dirty
    }

    /// Record one logical mutation that the structural operations below did
    /// not already account for (character insert/delete).
    pub fn mark_dirty(&mut self) {
        self.dirty += 1;
    }

    /// Reset the dirty counter after a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = 0;
    }

    /// Insert a new row at `at` (clamped to `[0, rows]`) owning a copy of
    /// `bytes`.
    pub fn insert_row(&mut self, at: usize, bytes: &[u8]) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::from_bytes(bytes, self.tab_stop));
        self.dirty += 1;
    }

    /// Remove the row at `at`. Silent no-op outside `[0, rows)`.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    /// Insert one byte into a row at column `at` (clamped to the row
    /// length). No-op when the row does not exist.
    pub fn insert_char(&mut self, row: usize, at: usize, byte: u8) {
        let tab_stop = self.tab_stop;
        if let Some(r) = self.rows.get_mut(row) {
            r.insert_byte(at, byte, tab_stop);
        }
    }

    /// Remove one byte from a row. No-op unless `at` indexes an existing
    /// byte of an existing row.
    pub fn delete_char(&mut self, row: usize, at: usize) {
        let tab_stop = self.tab_stop;
        if let Some(r) = self.rows.get_mut(row) {
            r.delete_byte(at, tab_stop);
        }
    }

    /// Concatenate `bytes` onto the end of a row (row join).
    pub fn append_bytes(&mut self, row: usize, bytes: &[u8]) {
        let tab_stop = self.tab_stop;
        if let Some(r) = self.rows.get_mut(row) {
            r.append(bytes, tab_stop);
            self.dirty += 1;
        }
    }

    /// Cut a row down to its first `at` bytes. Used by the newline split,
    /// whose dirty increment is carried by the accompanying `insert_row`.
    pub fn truncate_row(&mut self, row: usize, at: usize) {
        let tab_stop = self.tab_stop;
        if let Some(r) = self.rows.get_mut(row) {
            r.truncate(at, tab_stop);
        }
    }

    /// Serialize every row followed by a single `\n`, in row order. The
    /// exact inverse of [`Document::from_bytes`] modulo CR stripping.
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.chars());
            out.push(b'\n');
        }
        out
    }
}
