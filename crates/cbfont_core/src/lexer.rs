//! Line grammar lexer for C-style glyph array lines.
//!
//! One line of a glyph source file is either blank, a `// comment`, or a
//! brace-delimited list of column values with an optional trailing comment:
//!
//! ```text
//! {0x01F8,0x0010,0x0008,0x01F0}, // N
//! ```
//!
//! The lexer walks the line one character at a time through an explicit
//! state machine. All working storage (token buffer, radix mark, column
//! list, comment buffer) lives in the per-call [`LineLexer`] context, so
//! parses are re-entrant and never contaminate each other.

use crate::{codec, CbFontError, CellSize, PixelCell, Record, Result};

/// Lexer states, one per grammar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    /// Start of line, nothing consumed yet.
    Init,
    /// Consuming leading spaces.
    SkipSpace,
    /// One `/` seen; a second is required to open a comment line.
    CommentOpen,
    /// Inside a `//` line; the rest of the line is comment text.
    CommentLine,
    /// Inside `{...}`, collecting value tokens.
    ParseCode,
    /// Past the closing brace; trailing comma, spaces or a comment may follow.
    CodeDone,
    /// Collecting a trailing comment to end of line.
    TrailingComment,
    /// The line could not be parsed.
    Failed,
}

impl LexState {
    fn name(self) -> &'static str {
        match self {
            LexState::Init => "Init",
            LexState::SkipSpace => "SkipSpace",
            LexState::CommentOpen => "CommentOpen",
            LexState::CommentLine => "CommentLine",
            LexState::ParseCode => "ParseCode",
            LexState::CodeDone => "CodeDone",
            LexState::TrailingComment => "TrailingComment",
            LexState::Failed => "Failed",
        }
    }
}

/// Per-parse state machine and accumulator.
struct LineLexer<'a> {
    line: &'a str,
    size: CellSize,
    state: LexState,
    /// Characters of the value token currently being collected.
    token: String,
    /// Set when the current token carries an `x`/`X` radix marker.
    token_is_hex: bool,
    columns: Vec<PixelCell>,
    comment: String,
    comment_present: bool,
    character_present: bool,
    /// Character index of the next input, for error reporting.
    position: usize,
}

impl<'a> LineLexer<'a> {
    fn new(line: &'a str, size: CellSize) -> Self {
        Self {
            line,
            size,
            state: LexState::Init,
            token: String::new(),
            token_is_hex: false,
            columns: Vec::with_capacity(size.cols as usize),
            comment: String::new(),
            comment_present: false,
            character_present: false,
            position: 0,
        }
    }

    /// Consume one character, advancing the state machine.
    fn step(&mut self, c: char) -> Result<()> {
        match self.state {
            LexState::Init | LexState::SkipSpace => match c {
                ' ' => self.state = LexState::SkipSpace,
                '/' => self.state = LexState::CommentOpen,
                '{' => self.state = LexState::ParseCode,
                _ => return Err(self.fail()),
            },
            LexState::CommentOpen => match c {
                '/' => {
                    self.comment_present = true;
                    self.comment.push_str("//");
                    self.state = LexState::CommentLine;
                }
                _ => return Err(self.fail()),
            },
            LexState::CommentLine => self.comment.push(c),
            LexState::ParseCode => {
                if c.is_whitespace() {
                    // skipped, not accumulated
                } else if c.is_ascii_digit() || matches!(c.to_ascii_uppercase(), 'A'..='F' | 'X') {
                    if c.eq_ignore_ascii_case(&'x') {
                        self.token_is_hex = true;
                    }
                    self.token.push(c);
                } else if c == ',' {
                    self.finish_token()?;
                } else if c == '}' {
                    self.finish_token()?;
                    self.character_present = true;
                    self.state = LexState::CodeDone;
                } else {
                    return Err(self.fail());
                }
            }
            LexState::CodeDone => match c {
                ',' | ' ' => {}
                '/' => {
                    self.comment_present = true;
                    self.comment.push(c);
                    self.state = LexState::TrailingComment;
                }
                _ => return Err(self.fail()),
            },
            LexState::TrailingComment => {
                if c.is_control() {
                    return Err(self.fail());
                }
                self.comment.push(c);
            }
            LexState::Failed => {}
        }
        Ok(())
    }

    /// Apply the end-of-input transition and build the record.
    fn finish(mut self) -> Result<Record> {
        match self.state {
            // Nothing but (optional) spaces: a blank line.
            LexState::Init | LexState::SkipSpace => Ok(Record::default()),
            LexState::CommentLine | LexState::CodeDone | LexState::TrailingComment => self.build(),
            // An unterminated code list or a lone `/` cannot complete.
            LexState::CommentOpen | LexState::ParseCode | LexState::Failed => Err(self.fail()),
        }
    }

    /// Finalize the collected token as one column value.
    fn finish_token(&mut self) -> Result<()> {
        if self.columns.len() >= self.size.cols as usize {
            self.state = LexState::Failed;
            return Err(CbFontError::TooManyColumns {
                max: self.size.cols as usize,
            });
        }
        let token = std::mem::take(&mut self.token);
        let parsed = if self.token_is_hex {
            // Strip the two-character `0x`/`0X` prefix, then radix 16.
            u32::from_str_radix(token.get(2..).unwrap_or_default(), 16)
        } else {
            u32::from_str_radix(&token, 10)
        };
        self.token_is_hex = false;
        match parsed {
            Ok(value) => {
                self.columns.push(value);
                Ok(())
            }
            Err(err) => {
                self.state = LexState::Failed;
                Err(CbFontError::InvalidNumber {
                    token,
                    message: err.to_string(),
                })
            }
        }
    }

    fn fail(&mut self) -> CbFontError {
        let state = self.state.name();
        self.state = LexState::Failed;
        CbFontError::Malformed {
            line: self.line.to_string(),
            state,
            position: self.position,
        }
    }

    fn build(&mut self) -> Result<Record> {
        let comment = if self.comment_present {
            Some(normalize_comment(&self.comment))
        } else {
            None
        };
        let columns = if self.character_present {
            Some(codec::decode_columns(&self.columns, self.size)?)
        } else {
            None
        };
        Ok(Record { comment, columns })
    }
}

/// Strip one comment introducer (`//`, or the lone `/` of a trailing
/// comment) and its surrounding left whitespace.
///
/// The machine accumulates comment text verbatim, introducer included; the
/// record stores the text alone and the serializer re-renders `// text`.
fn normalize_comment(raw: &str) -> String {
    let text = raw.trim_start();
    let text = text.strip_prefix("//").or_else(|| text.strip_prefix('/')).unwrap_or(text);
    text.trim_start().to_string()
}

/// Decode one raw line into a [`Record`].
///
/// Blank lines (empty or all spaces) yield a record with both fields empty.
/// Lines that do not match the grammar return a decode error carrying the
/// raw text; bulk loaders preserve such lines verbatim instead of dropping
/// them.
pub fn parse_line(line: &str, size: CellSize) -> Result<Record> {
    let mut lexer = LineLexer::new(line, size);
    for c in line.chars() {
        lexer.step(c)?;
        lexer.position += 1;
    }
    lexer.finish()
}
