//! Goldish error handling.
//!
//! Every fatal condition the harness or the CLI can hit is one variant of
//! [`GoldishError`]. Output mismatches are not errors: they are collected in a
//! [`RunReport`](crate::harness::RunReport) and the run keeps going.

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed error returned by user evaluators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Crate-wide result alias.
pub type Result<T, E = GoldishError> = std::result::Result<T, E>;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Fatal failures. Any of these stops the run before the case file is written.
#[derive(Debug, Error, Diagnostic)]
pub enum GoldishError {
    #[error("I/O error on case file '{}'", .path.display())]
    #[diagnostic(
        code(goldish::io),
        help(
            "case files live at <testdata>/<test name><suffix>; \
             create the file or fix its permissions"
        )
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("case file '{}' is not valid UTF-8", .path.display())]
    #[diagnostic(code(goldish::encoding))]
    Encoding { path: PathBuf },

    #[error("evaluator failed on case {case} of '{test}'")]
    #[diagnostic(code(goldish::evaluator))]
    Evaluator {
        test: String,
        case: usize,
        #[source]
        source: BoxError,
    },

    #[error("'{key}' is not a valid out key (case {case} of '{test}')")]
    #[diagnostic(code(goldish::unknown_out_key))]
    UnknownOutputKey {
        test: String,
        case: usize,
        key: String,
        #[help]
        allowed: String,
    },

    #[error("'{}' is not in canonical form", .path.display())]
    #[diagnostic(
        code(goldish::not_canonical),
        help("run `goldish fmt` without --check to rewrite it")
    )]
    NotCanonical { path: PathBuf },
}

impl GoldishError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        GoldishError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn unknown_output_key(test: &str, case: usize, key: &str, out_keys: &[&str]) -> Self {
        GoldishError::UnknownOutputKey {
            test: test.to_string(),
            case,
            key: key.to_string(),
            allowed: format!(
                "the evaluator may only return declared out keys: {}",
                out_keys.join(", ")
            ),
        }
    }

    /// Maps a read error, turning `InvalidData` into the dedicated encoding variant.
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::InvalidData {
            GoldishError::Encoding {
                path: path.as_ref().to_path_buf(),
            }
        } else {
            Self::io(path, source)
        }
    }
}
