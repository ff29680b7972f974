//! The decoded form of one source line.

use crate::{CellGrid, CellSize, PixelCell};

/// One line of a glyph source file in decoded form.
///
/// A record may carry a comment, a column list, both (a glyph line with a
/// trailing comment), or neither (a blank line). Unparseable lines never
/// become records; the document keeps their raw text instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Comment text without the `//` introducer.
    pub comment: Option<String>,
    /// Column words, left to right; exactly `cols` entries when present.
    pub columns: Option<Vec<PixelCell>>,
}

impl Record {
    /// A record carrying only a comment.
    pub fn from_comment(text: impl Into<String>) -> Self {
        Self {
            comment: Some(text.into()),
            columns: None,
        }
    }

    /// A record carrying the pixel data of `grid` and an optional comment.
    pub fn from_grid(grid: &CellGrid, comment: Option<String>) -> Self {
        Self {
            comment,
            columns: Some(grid.columns().to_vec()),
        }
    }

    /// True when the record represents a blank line.
    pub fn is_blank(&self) -> bool {
        self.comment.is_none() && self.columns.is_none()
    }

    /// True when the line carried a brace-delimited code list.
    pub fn has_character(&self) -> bool {
        self.columns.is_some()
    }

    /// True when any pixel of the code list is set.
    pub fn has_pixels(&self) -> bool {
        self.columns.as_ref().is_some_and(|c| c.iter().any(|&v| v != 0))
    }

    /// The pixel matrix for display; all-off when the record has no code list.
    pub fn to_grid(&self, size: CellSize) -> CellGrid {
        match &self.columns {
            Some(columns) => CellGrid::from_columns(size, columns),
            None => CellGrid::new(size),
        }
    }
}
