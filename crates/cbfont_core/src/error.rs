//! Unified error types for cbfont_core

use thiserror::Error;

/// Main error type for cbfont_core operations
#[derive(Debug, Error)]
pub enum CbFontError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Decode Errors ===
    #[error("Line does not match the glyph grammar (failed in {state} at character {position}): {line:?}")]
    Malformed {
        line: String,
        state: &'static str,
        position: usize,
    },

    #[error("Invalid numeric token '{token}': {message}")]
    InvalidNumber { token: String, message: String },

    #[error("Too many column values: cell has {max} columns")]
    TooManyColumns { max: usize },

    // === Encode Errors ===
    #[error("Column count mismatch: expected {expected}, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("Value {value:#X} does not fit in a {bits}-bit column word")]
    ValueOutOfRange { value: u32, bits: u32 },

    // === Config Errors ===
    #[error("Invalid cell size {rows}x{cols}: rows must be a multiple of 8 up to 32, cols nonzero")]
    InvalidCellSize { rows: u32, cols: u32 },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

impl CbFontError {
    /// True for errors raised while decoding a source line; these are
    /// recovered locally by preserving the line verbatim.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            CbFontError::Malformed { .. } | CbFontError::InvalidNumber { .. } | CbFontError::TooManyColumns { .. }
        )
    }
}

/// Result type alias for cbfont_core operations
pub type Result<T> = std::result::Result<T, CbFontError>;
