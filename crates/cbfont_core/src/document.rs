//! Ordered record sequence with cursor navigation and dirty tracking.

use bitflags::bitflags;

use crate::{lexer, CellSize, Record};

/// One line slot of a document: a decoded record, or the verbatim text of a
/// line the lexer rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Record(Record),
    /// Raw text preserved unchanged; round-trips byte-identically.
    Unparsed(String),
}

impl Line {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Line::Record(record) => Some(record),
            Line::Unparsed(_) => None,
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, Line::Unparsed(_))
    }
}

/// Cursor movement requests from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    First,
    Last,
    Prev,
    Next,
}

/// Insertion targets for new records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Insert ahead of the cursor line; the cursor then addresses the new
    /// record.
    BeforeCursor,
    /// Append at the end of the document; the cursor stays put.
    Append,
}

bitflags! {
    /// Unsaved-change markers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DirtyFlags: u8 {
        /// The record at the cursor has edits not yet written back.
        const RECORD = 0b01;
        /// The document structure changed since the last save.
        const DOCUMENT = 0b10;
    }
}

/// An in-memory glyph source file: the ordered lines, a cursor, and the
/// dirty markers the presentation layer keys its save prompts on.
#[derive(Debug, Clone)]
pub struct Document {
    size: CellSize,
    lines: Vec<Line>,
    cursor: usize,
    dirty: DirtyFlags,
}

impl Document {
    pub fn new(size: CellSize) -> Self {
        Self {
            size,
            lines: Vec::new(),
            cursor: 0,
            dirty: DirtyFlags::empty(),
        }
    }

    /// Bulk-load a document from source text.
    ///
    /// Lines the lexer rejects are preserved verbatim and logged; nothing is
    /// dropped or silently rewritten.
    pub fn from_text(text: &str, size: CellSize) -> Self {
        let mut doc = Self::new(size);
        for raw in text.lines() {
            match lexer::parse_line(raw, size) {
                Ok(record) => doc.lines.push(Line::Record(record)),
                Err(err) => {
                    log::warn!("preserving unparsed line: {err}");
                    doc.lines.push(Line::Unparsed(raw.to_string()));
                }
            }
        }
        doc
    }

    pub fn size(&self) -> CellSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines preserved verbatim because they failed to decode.
    pub fn unparsed_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_unparsed()).count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 1-based cursor ordinal and total line count, for position readouts.
    pub fn position(&self) -> (usize, usize) {
        if self.lines.is_empty() {
            (0, 0)
        } else {
            (self.cursor + 1, self.lines.len())
        }
    }

    pub fn current(&self) -> Option<&Line> {
        self.lines.get(self.cursor)
    }

    /// The record at the cursor; `None` on an empty document or an unparsed
    /// line.
    pub fn current_record(&self) -> Option<&Record> {
        self.current().and_then(Line::record)
    }

    /// Move the cursor. Clamps at both ends; a no-op on an empty document.
    pub fn navigate(&mut self, motion: Motion) {
        if self.lines.is_empty() {
            return;
        }
        self.cursor = match motion {
            Motion::First => 0,
            Motion::Last => self.lines.len() - 1,
            Motion::Prev => self.cursor.saturating_sub(1),
            Motion::Next => (self.cursor + 1).min(self.lines.len() - 1),
        };
    }

    /// Insert a new record line, empty or copied from the cursor line.
    pub fn insert(&mut self, position: InsertPosition, copy_current: bool) {
        let line = if copy_current {
            self.current().cloned().unwrap_or(Line::Record(Record::default()))
        } else {
            Line::Record(Record::default())
        };
        match position {
            InsertPosition::BeforeCursor => {
                let at = self.cursor.min(self.lines.len());
                self.lines.insert(at, line);
            }
            InsertPosition::Append => self.lines.push(line),
        }
        self.dirty.insert(DirtyFlags::DOCUMENT);
    }

    /// Delete the line at the cursor, clamping the cursor to the last valid
    /// index. Returns `false` on an empty document.
    pub fn delete(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.remove(self.cursor);
        if self.cursor >= self.lines.len() {
            self.cursor = self.lines.len().saturating_sub(1);
        }
        self.dirty.insert(DirtyFlags::DOCUMENT);
        true
    }

    /// Overwrite the record at the cursor with an edited one and clear the
    /// record dirty marker. Returns `false` on an empty document.
    pub fn replace_at_cursor(&mut self, record: Record) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines[self.cursor] = Line::Record(record);
        self.dirty.remove(DirtyFlags::RECORD);
        true
    }

    /// Note that the presentation layer holds pending edits for the cursor
    /// record.
    pub fn mark_record_dirty(&mut self) {
        self.dirty.insert(DirtyFlags::RECORD);
    }

    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    pub fn is_record_dirty(&self) -> bool {
        self.dirty.contains(DirtyFlags::RECORD)
    }

    pub fn is_document_dirty(&self) -> bool {
        self.dirty.contains(DirtyFlags::DOCUMENT)
    }

    /// Reset the dirty markers after a successful save.
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::empty();
    }
}
