//! Bidirectional mapping between pixel column words and on-disk literals.
//!
//! The native format renders each column as one zero-padded hex word; the
//! byte-split format decomposes every word into single-byte literals for
//! loaders that cannot fetch multi-byte values atomically (`pgm_read_byte`
//! targets). Both renditions come from the same decoded column words.

use crate::{CbFontError, CellSize, PixelCell, Result};

/// Map positional value tokens onto a full column list.
///
/// Tokens map to columns left to right; fewer tokens than `cols` leave the
/// trailing columns at zero, more than `cols` is an error.
pub fn decode_columns(tokens: &[PixelCell], size: CellSize) -> Result<Vec<PixelCell>> {
    let cols = size.cols as usize;
    if tokens.len() > cols {
        return Err(CbFontError::TooManyColumns { max: cols });
    }
    let mut columns = vec![0; cols];
    columns[..tokens.len()].copy_from_slice(tokens);
    Ok(columns)
}

/// Render one column word as a canonical zero-padded hex literal.
pub fn format_cell(value: PixelCell, size: CellSize) -> String {
    format!("0x{value:0width$X}", width = size.hex_digits())
}

/// Decompose one column word into its bytes, most significant first, each
/// rendered as a `0xHH` literal.
///
/// Numeric shift/mask decomposition, so the result matches the left-to-right
/// digit order of the native literal regardless of how that literal was
/// formatted.
pub fn split_to_bytes(value: PixelCell, byte_width: u32) -> Vec<String> {
    (0..byte_width)
        .map(|i| {
            let shift = 8 * (byte_width - 1 - i);
            format!("0x{:02X}", (value >> shift) & 0xFF)
        })
        .collect()
}

/// Render a record line in the native word-width format:
/// `{0x01F8,0x0010,...}` with a trailing comma unless this is the last line
/// of the document, then the `// comment` tail when one is present.
pub fn encode_record(columns: &[PixelCell], comment: Option<&str>, is_last_line: bool, size: CellSize) -> Result<String> {
    encode_with(columns, comment, is_last_line, size, |out, value, size| {
        out.push_str(&format_cell(value, size));
    })
}

/// Render a record line in the byte-split format: identical structure, but
/// every column word is replaced by its byte decomposition, comma-joined.
pub fn encode_record_bytes(columns: &[PixelCell], comment: Option<&str>, is_last_line: bool, size: CellSize) -> Result<String> {
    encode_with(columns, comment, is_last_line, size, |out, value, size| {
        out.push_str(&split_to_bytes(value, size.byte_width()).join(","));
    })
}

fn encode_with(
    columns: &[PixelCell],
    comment: Option<&str>,
    is_last_line: bool,
    size: CellSize,
    render_value: impl Fn(&mut String, PixelCell, CellSize),
) -> Result<String> {
    let cols = size.cols as usize;
    if columns.len() != cols {
        return Err(CbFontError::ColumnCountMismatch {
            expected: cols,
            actual: columns.len(),
        });
    }
    let mask = size.word_mask();

    let mut out = String::with_capacity(cols * (size.hex_digits() + 3) + 16);
    out.push('{');
    for (i, &value) in columns.iter().enumerate() {
        if value & !mask != 0 {
            return Err(CbFontError::ValueOutOfRange { value, bits: size.rows });
        }
        if i > 0 {
            out.push(',');
        }
        render_value(&mut out, value, size);
    }
    out.push('}');
    if !is_last_line {
        out.push(',');
    }
    if let Some(comment) = comment {
        out.push_str(" //");
        if !comment.is_empty() {
            out.push(' ');
            out.push_str(comment);
        }
    }
    Ok(out)
}
