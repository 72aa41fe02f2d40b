//! The goldish command-line interface.
//!
//! Works on case files directly, outside of any test run.

use crate::cli::args::{Command, GoldishArgs};
use crate::config::HarnessConfig;
use crate::errors::GoldishError;
use crate::syntax::{parse_with_diagnostics, serialize, Parsed};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> miette::Result<()> {
    let args = GoldishArgs::parse();
    dispatch(args.command)
}

/// Runs one already-parsed subcommand.
pub fn dispatch(command: Command) -> miette::Result<()> {
    match command {
        Command::Show { file, json } => handle_show(&file, json),
        Command::Fmt { file, keys, check } => handle_fmt(&file, &keys, check),
        Command::List { dir, suffix } => handle_list(&dir, &suffix),
    }
}

fn load(path: &Path) -> Result<(String, Parsed), GoldishError> {
    let text = fs::read_to_string(path).map_err(|e| GoldishError::read(path, e))?;
    let parsed = parse_with_diagnostics(&text);
    debug!(path = %path.display(), cases = parsed.cases.len(), "parsed case file");
    Ok((text, parsed))
}

/// Handles the `show` subcommand.
fn handle_show(path: &Path, json: bool) -> miette::Result<()> {
    let (_, parsed) = load(path)?;
    output::print_stray_lines(path, &parsed.stray_lines);
    if json {
        let rendered =
            serde_json::to_string_pretty(&parsed.cases).map_err(|e| miette::miette!("{e}"))?;
        println!("{}", rendered);
    } else {
        output::print_cases(&parsed.cases);
    }
    Ok(())
}

/// Handles the `fmt` subcommand.
fn handle_fmt(path: &Path, keys: &[String], check: bool) -> miette::Result<()> {
    let (text, parsed) = load(path)?;
    output::print_stray_lines(path, &parsed.stray_lines);
    let canonical = serialize(&parsed.cases, keys);
    if canonical == text {
        return Ok(());
    }
    if check {
        output::print_text_diff(&text, &canonical);
        return Err(GoldishError::NotCanonical {
            path: path.to_path_buf(),
        }
        .into());
    }
    fs::write(path, canonical).map_err(|e| GoldishError::io(path, e))?;
    println!("formatted {}", path.display());
    Ok(())
}

/// Handles the `list` subcommand.
fn handle_list(dir: &Path, suffix: &str) -> miette::Result<()> {
    let config = HarnessConfig::default()
        .with_testdata_dir(dir)
        .with_suffix(suffix);
    for path in find_case_files(&config) {
        let (_, parsed) = load(&path)?;
        output::print_listing(&path, &parsed);
    }
    Ok(())
}

/// All case files under the config's testdata directory, sorted.
pub fn find_case_files(config: &HarnessConfig) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(&config.testdata_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && config.is_case_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}
