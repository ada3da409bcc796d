//! A single document line: raw bytes plus the derived render form.
//!
//! `render` is always a pure function of `chars` and the tab stop: every
//! mutation of `chars` goes through a method on this type, and every such
//! method ends by recomputing `render`. Nothing else may touch `render`.
//! Lengths are carried by the vectors themselves; there are no separate
//! size fields to drift out of sync.

/// One line of the document. Content is byte-oriented: femto makes no
/// attempt at multi-byte character handling, so a column index is a byte
/// index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn from_bytes(bytes: &[u8], tab_stop: usize) -> Self {
        let mut row = Self {
            chars: bytes.to_vec(),
            render: Vec::new(),
        };
        row.update_render(tab_stop);
        row
    }

    /// Raw content, without any line terminator.
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Tab-expanded content as shown on screen.
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Map a raw column to its render column: one cell per ordinary byte,
    /// tabs jump to the next multiple of the tab stop. Monotone in `cx` and
    /// the identity while no tab precedes `cx`.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let mut rx = 0;
        for &b in self.chars.iter().take(cx) {
            if b == b'\t' {
                rx += (tab_stop - 1) - (rx % tab_stop);
            }
            rx += 1;
        }
        rx
    }

    pub(crate) fn insert_byte(&mut self, at: usize, byte: u8, tab_stop: usize) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, byte);
        self.update_render(tab_stop);
    }

    pub(crate) fn delete_byte(&mut self, at: usize, tab_stop: usize) {
        if at >= self.chars.len() {
            return;
        }
        self.chars.remove(at);
        self.update_render(tab_stop);
    }

    pub(crate) fn append(&mut self, bytes: &[u8], tab_stop: usize) {
        self.chars.extend_from_slice(bytes);
        self.update_render(tab_stop);
    }

    pub(crate) fn truncate(&mut self, at: usize, tab_stop: usize) {
        self.chars.truncate(at);
        self.update_render(tab_stop);
    }

    fn update_render(&mut self, tab_stop: usize) {
        let tabs = self.chars.iter().filter(|&&b| b == b'\t').count();
        self.render = Vec::with_capacity(self.chars.len() + tabs * (tab_stop - 1));
        for &b in &self.chars {
            if b == b'\t' {
                self.render.push(b' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(b);
            }
        }
    }
}
