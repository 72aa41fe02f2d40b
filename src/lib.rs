//! Goldish: golden testing with many cases in one human-friendly file.
//!
//! A case file holds any number of cases, each a comment plus named string
//! fields. [`check_goldens`] feeds each case's input fields to an evaluator,
//! compares what it returns with the case's golden output fields, and with
//! `GOLDISH_UPDATE=1` rewrites the file with the fresh outputs instead.

pub mod case;
pub mod cli;
pub mod config;
pub mod errors;
pub mod harness;
pub mod syntax;

pub use case::{Case, CaseList, Fields};
pub use config::HarnessConfig;
pub use errors::{BoxError, GoldishError, Result};
pub use harness::store::{CaseStore, FsStore, MemoryStore};
pub use harness::{check_goldens, check_goldens_with, run, EvalResult, Mismatch, RunReport};
pub use syntax::{parse, serialize};
