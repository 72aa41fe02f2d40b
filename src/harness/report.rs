//! Human-readable rendering of harness results.

use super::{Mismatch, RunReport};
use crate::case::Fields;
use crate::config::UPDATE_ENV;
use difference::{Changeset, Difference};
use std::collections::BTreeSet;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// ============================================================================
// PLAIN TEXT
// ============================================================================

/// Renders one mismatch: both mappings, then a line diff per differing key.
pub fn render_mismatch(mismatch: &Mismatch) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_mismatch(&mut termcolor::NoColor::new(&mut out), mismatch);
    String::from_utf8_lossy(&out).into_owned()
}

/// Renders a whole run. Empty when the run succeeded.
pub fn render_report(report: &RunReport) -> String {
    let mut out = Vec::new();
    let _ = write_report(&mut termcolor::NoColor::new(&mut out), report);
    String::from_utf8_lossy(&out).into_owned()
}

// ============================================================================
// COLORED OUTPUT
// ============================================================================

/// Prints a run's mismatches to stderr with colored diffs.
pub fn print_report(report: &RunReport) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = write_report(&mut stderr, report);
}

/// Prints a colored line diff between two texts to stdout.
pub fn print_text_diff(old: &str, new: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = write_text_diff(&mut stdout, old, new, "");
    let _ = stdout.reset();
}

pub fn write_report<W: WriteColor>(w: &mut W, report: &RunReport) -> io::Result<()> {
    if report.is_success() {
        return Ok(());
    }
    w.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    writeln!(
        w,
        "{}: {} of {} cases differ from {}",
        report.test_name,
        report.mismatches.len(),
        report.cases,
        report.path.display()
    )?;
    w.reset()?;
    for mismatch in &report.mismatches {
        write_mismatch(w, mismatch)?;
    }
    writeln!(w, "Update golden file with {}=1.", UPDATE_ENV)
}

pub fn write_mismatch<W: WriteColor>(w: &mut W, mismatch: &Mismatch) -> io::Result<()> {
    w.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    write!(w, "--- case {}", mismatch.index)?;
    if let Some(first) = mismatch.comment.lines().next() {
        write!(w, " {}", first)?;
    }
    writeln!(w, " ---")?;
    w.reset()?;
    writeln!(w, "{:?} vs {:?}", mismatch.saved, mismatch.computed)?;

    for key in differing_keys(&mismatch.saved, &mismatch.computed) {
        writeln!(w, "{}:", key)?;
        match (mismatch.saved.get(key), mismatch.computed.get(key)) {
            (Some(old), Some(new)) => write_text_diff(w, old, new, "  ")?,
            (Some(_), None) => writeln!(w, "  (not computed)")?,
            (None, Some(_)) => writeln!(w, "  (no golden value)")?,
            (None, None) => {}
        }
    }
    Ok(())
}

fn write_text_diff<W: WriteColor>(w: &mut W, old: &str, new: &str, indent: &str) -> io::Result<()> {
    let changeset = Changeset::new(old, new, "\n");
    for diff in &changeset.diffs {
        let (marker, color, chunk) = match diff {
            Difference::Same(x) => (' ', None, x),
            Difference::Add(x) => ('+', Some(Color::Green), x),
            Difference::Rem(x) => ('-', Some(Color::Red), x),
        };
        w.set_color(ColorSpec::new().set_fg(color))?;
        for line in chunk.split('\n') {
            writeln!(w, "{}{}{}", indent, marker, line)?;
        }
        w.reset()?;
    }
    Ok(())
}

fn differing_keys<'a>(saved: &'a Fields, computed: &'a Fields) -> Vec<&'a str> {
    let keys: BTreeSet<&str> = saved
        .keys()
        .chain(computed.keys())
        .map(String::as_str)
        .collect();
    keys.into_iter()
        .filter(|k| saved.get(*k) != computed.get(*k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn mismatch_shows_both_mappings_and_diff() {
        let mismatch = Mismatch {
            index: 2,
            comment: "# adds one\n# second line".into(),
            saved: fields(&[("sum", "1")]),
            computed: fields(&[("sum", "2")]),
        };
        assert_eq!(
            render_mismatch(&mismatch),
            "--- case 2 # adds one ---\n\
             {\"sum\": \"1\"} vs {\"sum\": \"2\"}\n\
             sum:\n  -1\n  +2\n"
        );
    }

    #[test]
    fn missing_sides_are_labelled() {
        let mismatch = Mismatch {
            index: 0,
            comment: String::new(),
            saved: fields(&[("a", "x")]),
            computed: fields(&[("b", "y")]),
        };
        let text = render_mismatch(&mismatch);
        assert!(text.contains("a:\n  (not computed)\n"));
        assert!(text.contains("b:\n  (no golden value)\n"));
    }

    #[test]
    fn successful_report_renders_nothing() {
        let report = RunReport {
            test_name: "t".into(),
            path: PathBuf::from("testdata/t_cases.txt"),
            cases: 3,
            mismatches: Vec::new(),
            updated: false,
        };
        assert_eq!(render_report(&report), "");
    }

    #[test]
    fn colored_report_matches_plain_text() {
        let report = RunReport {
            test_name: "sum".into(),
            path: PathBuf::from("testdata/sum_cases.txt"),
            cases: 2,
            mismatches: vec![Mismatch {
                index: 1,
                comment: String::new(),
                saved: fields(&[("sum", "1")]),
                computed: fields(&[("sum", "2")]),
            }],
            updated: false,
        };

        let mut colored = termcolor::Buffer::ansi();
        write_report(&mut colored, &report).unwrap();
        let colored = String::from_utf8(colored.into_inner()).unwrap();
        assert!(colored.contains("\x1b["));
        assert!(colored.contains("sum: 1 of 2 cases differ from testdata/sum_cases.txt"));

        let mut plain = termcolor::Buffer::no_color();
        write_report(&mut plain, &report).unwrap();
        assert_eq!(String::from_utf8(plain.into_inner()).unwrap(), render_report(&report));
    }
}
