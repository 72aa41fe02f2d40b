//! Case-file parser.
//!
//! The parser is a small state machine driven by a one-line-lookahead cursor:
//!
//! ```text
//! SeekCase -> ReadComment -> ReadFields <-> ReadValue
//!                               |
//!                               v
//!                            EndCase -> SeekCase ... Done
//! ```
//!
//! It never rejects input. Anything that does not fit the grammar is absorbed
//! into the nearest valid reading, and lines that cannot start a case are
//! skipped and reported as [`StrayLine`]s.

use super::{COMMENT_PREFIX, KEY_SUFFIX, VALUE_INDENT};
use crate::case::{Case, CaseList};
use serde::Serialize;
use std::io::Read;
use tracing::warn;

// ============================================================================
// PUBLIC API
// ============================================================================

/// A non-blank line found where a case should start that is neither a comment
/// nor a key line. The parser skips it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrayLine {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
}

/// Parser output including diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub cases: CaseList,
    pub stray_lines: Vec<StrayLine>,
}

/// Parses case-file text.
pub fn parse(text: &str) -> CaseList {
    parse_with_diagnostics(text).cases
}

/// Parses case-file text and also returns the lines that were skipped.
pub fn parse_with_diagnostics(text: &str) -> Parsed {
    let mut parser = CaseParser::new(text);
    let mut state = ParseState::SeekCase;
    while state != ParseState::Done {
        state = parser.step(state);
    }
    Parsed {
        cases: CaseList::new(parser.cases),
        stray_lines: parser.stray_lines,
    }
}

/// Reads a whole byte stream and parses it.
///
/// Fails only when reading fails or the bytes are not UTF-8
/// (`io::ErrorKind::InvalidData`).
pub fn parse_reader<R: Read>(mut reader: R) -> std::io::Result<CaseList> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse(&text))
}

// ============================================================================
// LINE CURSOR
// ============================================================================

/// Forward-only cursor holding one buffered line.
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    current: Option<&'a str>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        let mut cursor = Self {
            lines: text.lines(),
            current: None,
            line_no: 0,
        };
        cursor.advance();
        cursor
    }

    fn current(&self) -> Option<&'a str> {
        self.current
    }

    /// Moves to the next line. Returns false at end of input.
    fn advance(&mut self) -> bool {
        self.current = self.lines.next();
        if self.current.is_some() {
            self.line_no += 1;
        }
        self.current.is_some()
    }
}

// ============================================================================
// STATE MACHINE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState<'a> {
    /// Skipping blank lines until something can start a case.
    SeekCase,
    /// Collecting contiguous `#` lines.
    ReadComment,
    /// Expecting a key line or the end of the case.
    ReadFields,
    /// Collecting indented value lines for `key`.
    ReadValue { key: &'a str },
    /// The cursor left the case; push it.
    EndCase,
    Done,
}

fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

fn key_name(line: &str) -> Option<&str> {
    line.strip_suffix(KEY_SUFFIX)
}

struct CaseParser<'a> {
    cursor: LineCursor<'a>,
    case: Case,
    buffer: Vec<&'a str>,
    cases: Vec<Case>,
    stray_lines: Vec<StrayLine>,
}

impl<'a> CaseParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(text),
            case: Case::default(),
            buffer: Vec::new(),
            cases: Vec::new(),
            stray_lines: Vec::new(),
        }
    }

    fn step(&mut self, state: ParseState<'a>) -> ParseState<'a> {
        match state {
            ParseState::SeekCase => self.seek_case(),
            ParseState::ReadComment => self.read_comment(),
            ParseState::ReadFields => self.read_fields(),
            ParseState::ReadValue { key } => self.read_value(key),
            ParseState::EndCase => {
                self.cases.push(std::mem::take(&mut self.case));
                ParseState::SeekCase
            }
            ParseState::Done => ParseState::Done,
        }
    }

    fn seek_case(&mut self) -> ParseState<'a> {
        match self.cursor.current() {
            None => ParseState::Done,
            Some("") => {
                self.cursor.advance();
                ParseState::SeekCase
            }
            Some(line) if is_comment(line) || key_name(line).is_some() => ParseState::ReadComment,
            Some(line) => {
                warn!(line = self.cursor.line_no, text = line, "skipping stray line");
                self.stray_lines.push(StrayLine {
                    line: self.cursor.line_no,
                    text: line.to_string(),
                });
                self.cursor.advance();
                ParseState::SeekCase
            }
        }
    }

    fn read_comment(&mut self) -> ParseState<'a> {
        match self.cursor.current() {
            Some(line) if is_comment(line) => {
                self.buffer.push(line);
                self.cursor.advance();
                ParseState::ReadComment
            }
            _ => {
                self.case.comment = self.buffer.join("\n");
                self.buffer.clear();
                ParseState::ReadFields
            }
        }
    }

    fn read_fields(&mut self) -> ParseState<'a> {
        match self.cursor.current().and_then(key_name) {
            Some(key) => {
                self.cursor.advance();
                ParseState::ReadValue { key }
            }
            None => ParseState::EndCase,
        }
    }

    fn read_value(&mut self, key: &'a str) -> ParseState<'a> {
        match self.cursor.current().and_then(|l| l.strip_prefix(VALUE_INDENT)) {
            Some(content) => {
                self.buffer.push(content);
                self.cursor.advance();
                ParseState::ReadValue { key }
            }
            None => {
                let value = self.buffer.join("\n");
                self.buffer.clear();
                self.case.fields.insert(key.to_string(), value);
                ParseState::ReadFields
            }
        }
    }
}
