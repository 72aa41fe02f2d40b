//! Canonical case-file writer.
//!
//! Output order is fully determined by the `key_order` argument: fields are
//! written in that order, and fields it does not name are dropped. Empty
//! values are never written.

use super::{KEY_SUFFIX, VALUE_INDENT};
use crate::case::{Case, CaseList};
use std::io::Write;

/// Renders `cases` as case-file text.
pub fn serialize<S: AsRef<str>>(cases: &CaseList, key_order: &[S]) -> String {
    let mut out = String::new();
    for (i, case) in cases.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_case(&mut out, case, key_order);
    }
    out
}

/// Streams the rendering of `cases` into `writer`.
pub fn write_cases<W: Write, S: AsRef<str>>(
    mut writer: W,
    cases: &CaseList,
    key_order: &[S],
) -> std::io::Result<()> {
    writer.write_all(serialize(cases, key_order).as_bytes())?;
    writer.flush()
}

fn write_case<S: AsRef<str>>(out: &mut String, case: &Case, key_order: &[S]) {
    if !case.comment.is_empty() {
        out.push_str(&case.comment);
        out.push('\n');
    }
    for key in key_order {
        let key = key.as_ref();
        let Some(value) = case.get(key).filter(|v| !v.is_empty()) else {
            continue;
        };
        out.push_str(key);
        out.push(KEY_SUFFIX);
        out.push('\n');
        out.push_str(VALUE_INDENT);
        out.push_str(&value.replace('\n', "\n  "));
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse;
    use pretty_assertions::assert_eq;

    const CANONICAL: &str = "\
# first case
# spans two lines
a:
  1
b:
  two
  lines
sum:
  3

a:
  5
sum:
  6
";

    #[test]
    fn canonical_text_round_trips() {
        let cases = parse(CANONICAL);
        assert_eq!(serialize(&cases, &["a", "b", "sum"]), CANONICAL);
    }

    #[test]
    fn reparse_is_idempotent() {
        let messy = "\n\nsum:\n  1\n# late comment\nb:\n\n\na:\n  x\n  \n  y\nzz:\n  dropped\n\n\n";
        let keys = ["a", "b", "sum"];
        let once = serialize(&parse(messy), &keys);
        let twice = serialize(&parse(&once), &keys);
        assert_eq!(once, twice);
    }

    #[test]
    fn key_order_filters_and_orders() {
        let cases = parse("sum:\n  3\nignored:\n  x\na:\n  1\n");
        assert_eq!(serialize(&cases, &["a", "sum"]), "a:\n  1\nsum:\n  3\n");
    }

    #[test]
    fn empty_values_are_omitted() {
        let cases = parse("a:\nb:\n  2\n");
        assert_eq!(serialize(&cases, &["a", "b"]), "b:\n  2\n");
    }

    #[test]
    fn empty_case_list_writes_nothing() {
        assert_eq!(serialize(&CaseList::default(), &["a"]), "");
    }

    #[test]
    fn write_cases_streams_same_text() {
        let cases = parse(CANONICAL);
        let mut buf = Vec::new();
        write_cases(&mut buf, &cases, &["a", "b", "sum"]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), CANONICAL);
    }
}
