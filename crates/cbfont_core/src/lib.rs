//! Core editing model for C-array glyph bitmap fonts.
//!
//! Glyph definitions for small monochrome displays (SSD1306/SSD1780-class
//! OLED controllers) are embedded as C-style array initializer lines, one
//! glyph per line:
//!
//! ```text
//! {0x01F8,0x0010,0x0008,0x01F0}, // N
//! ```
//!
//! This crate provides the line grammar lexer, the column-word codec, the
//! ordered-record document model with cursor navigation and dirty tracking,
//! and the serializers for the two on-disk formats (native word-width and
//! byte-split). The interactive editor surface sits on top of the
//! [`Document`] API and never appears here.

mod error;
pub use error::{CbFontError, Result};

mod cell;
pub use cell::{CellGrid, CellSize, PixelCell, MAX_ROWS};

mod record;
pub use record::Record;

pub mod lexer;
pub use lexer::parse_line;

pub mod codec;
pub use codec::{decode_columns, encode_record, split_to_bytes};

mod document;
pub use document::{DirtyFlags, Document, InsertPosition, Line, Motion};

pub mod formats;
pub use formats::{load_document, render_byte_split, render_native, save_document};

mod config;
pub use config::FontConfig;
