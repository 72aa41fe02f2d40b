//! Handles all user-facing output for the CLI.

use crate::case::CaseList;
use crate::syntax::{Parsed, StrayLine};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub use crate::harness::report::print_text_diff;

/// Prints every case with its index, comment and fields.
pub fn print_cases(cases: &CaseList) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for (i, case) in cases.iter().enumerate() {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
        println!("--- case {} ---", i);
        let _ = stdout.reset();
        if !case.comment.is_empty() {
            println!("{}", case.comment);
        }
        for (name, value) in &case.fields {
            println!("{}: {:?}", name, value);
        }
    }
}

/// Prints one line per case file: path, case count, stray line count.
pub fn print_listing(path: &Path, parsed: &Parsed) {
    println!(
        "{}\t{} cases\t{} stray lines",
        path.display(),
        parsed.cases.len(),
        parsed.stray_lines.len()
    );
}

/// Warns about skipped lines on stderr.
pub fn print_stray_lines(path: &Path, stray: &[StrayLine]) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    for line in stray {
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
        eprintln!(
            "warning: {}:{}: skipped stray line {:?}",
            path.display(),
            line.line,
            line.text
        );
        let _ = stderr.reset();
    }
}
