//! The two on-disk text formats and their file I/O.
//!
//! A save produces two files: the native word-width file at the chosen path
//! and the byte-split companion with the `8bit` marker appended to the file
//! name. Both are rendered from the same records before anything touches the
//! filesystem, and each file is published atomically via a temp-file rename,
//! so a failed save never leaves a mix of old and new content behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{codec, CellSize, Document, Line, PixelCell, Result};

/// Marker appended to the native file name for the byte-split output.
pub const BYTE_SPLIT_MARKER: &str = "8bit";

/// Render the document in the native word-width format.
pub fn render_native(doc: &Document) -> Result<String> {
    render_with(doc, codec::encode_record)
}

/// Render the document in the byte-split format.
pub fn render_byte_split(doc: &Document) -> Result<String> {
    render_with(doc, codec::encode_record_bytes)
}

fn render_with(doc: &Document, encode: impl Fn(&[PixelCell], Option<&str>, bool, CellSize) -> Result<String>) -> Result<String> {
    let last = doc.len().saturating_sub(1);
    let mut out = String::new();
    for (index, line) in doc.lines().iter().enumerate() {
        match line {
            Line::Unparsed(raw) => out.push_str(raw),
            Line::Record(record) => match &record.columns {
                Some(columns) => {
                    out.push_str(&encode(columns, record.comment.as_deref(), index == last, doc.size())?);
                }
                None => match &record.comment {
                    Some(comment) if comment.is_empty() => out.push_str("//"),
                    Some(comment) => {
                        out.push_str("// ");
                        out.push_str(comment);
                    }
                    None => {}
                },
            },
        }
        out.push('\n');
    }
    Ok(out)
}

/// Path of the byte-split companion for a native output path.
pub fn byte_split_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(BYTE_SPLIT_MARKER);
    path.with_file_name(name)
}

/// Serialize the document to `path` and its byte-split companion.
///
/// Clears the dirty markers on success and returns the two paths written.
pub fn save_document(doc: &mut Document, path: &Path) -> Result<(PathBuf, PathBuf)> {
    // Render both outputs up front; an encode failure writes nothing.
    let native = render_native(doc)?;
    let split = render_byte_split(doc)?;

    let native_path = path.to_path_buf();
    let split_path = byte_split_path(path);
    write_atomic(&native_path, &native)?;
    write_atomic(&split_path, &split)?;

    doc.clear_dirty();
    log::info!(
        "saved {} lines to {} and {}",
        doc.len(),
        native_path.display(),
        split_path.display()
    );
    Ok((native_path, split_path))
}

/// Read and bulk-decode a glyph source file.
pub fn load_document(path: &Path, size: CellSize) -> Result<Document> {
    let text = fs::read_to_string(path)?;
    let doc = Document::from_text(&text, size);
    if doc.unparsed_count() > 0 {
        log::warn!("{}: {} line(s) could not be parsed and were preserved verbatim", path.display(), doc.unparsed_count());
    }
    Ok(doc)
}

/// Write to a temp sibling, then rename into place.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut temp = path.as_os_str().to_os_string();
    temp.push(".tmp");
    let temp = PathBuf::from(temp);
    fs::write(&temp, contents)?;
    fs::rename(&temp, path)?;
    Ok(())
}
