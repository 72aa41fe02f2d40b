//! Defines the command-line arguments and subcommands for the goldish CLI.
//!
//! Uses the `clap` derive API, one variant per subcommand.

use crate::config::{DEFAULT_SUFFIX, DEFAULT_TESTDATA_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "goldish",
    version,
    about = "Inspect and canonicalize goldish case files."
)]
pub struct GoldishArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a case file and print its cases.
    Show {
        /// The case file to show.
        #[arg(required = true)]
        file: PathBuf,
        /// Print the cases as pretty JSON.
        #[arg(long)]
        json: bool,
    },
    /// Rewrite a case file in canonical form.
    Fmt {
        /// The case file to format.
        #[arg(required = true)]
        file: PathBuf,
        /// Field order; fields not listed are dropped.
        #[arg(long, short, required = true, value_delimiter = ',')]
        keys: Vec<String>,
        /// Write nothing; fail if the file is not already canonical.
        #[arg(long)]
        check: bool,
    },
    /// List every case file under a directory.
    List {
        /// The directory to search.
        #[arg(default_value = DEFAULT_TESTDATA_DIR)]
        dir: PathBuf,
        /// Case file name suffix.
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,
    },
}
