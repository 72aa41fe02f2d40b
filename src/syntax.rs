//! The goldish case-file format.
//!
//! ```text
//! # Adds one.
//! a:
//!   1
//! sum:
//!   2
//!
//! # Multi-line values keep their two-space indent on every line.
//! a:
//!   first
//!   second
//! ```
//!
//! Cases are separated by blank lines. A case is an optional block of `#`
//! comment lines followed by fields. A field is a `name:` line followed by the
//! value's lines, each indented by exactly two spaces.

pub mod parser;
pub mod writer;

pub use parser::{parse, parse_reader, parse_with_diagnostics, Parsed, StrayLine};
pub use writer::{serialize, write_cases};

/// First character of every comment line.
pub const COMMENT_PREFIX: char = '#';
/// Last character of every key line.
pub const KEY_SUFFIX: char = ':';
/// Prefix of every value line.
pub const VALUE_INDENT: &str = "  ";
