//! The crate's own golden tests: the parser and the writer are checked against
//! case files under `testdata/`, through the same harness users get.
//!
//! Refresh the files with `GOLDISH_UPDATE=1 cargo test --test golden`.

use goldish::{check_goldens, parse, serialize, CaseList, EvalResult, Fields};

fn input<'a>(inputs: &'a Fields, name: &str) -> &'a str {
    inputs.get(name).map(String::as_str).unwrap_or("")
}

fn outputs(pairs: &[(&str, String)]) -> Fields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn render_cases(cases: &CaseList) -> String {
    if cases.is_empty() {
        return "(no cases)".to_string();
    }
    cases
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}: {:?} {:?}", i, c.comment, c.fields))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn parser_cases() {
    check_goldens("parse", &["text"], &["cases"], |inputs| {
        let cases = parse(input(inputs, "text"));
        Ok(outputs(&[("cases", render_cases(&cases))]))
    });
}

#[test]
fn writer_cases() {
    check_goldens("serialize", &["keys", "text"], &["serialized"], |inputs| {
        let keys: Vec<String> = serde_json::from_str(input(inputs, "keys"))?;
        let cases = parse(input(inputs, "text"));
        Ok(outputs(&[("serialized", serialize(&cases, &keys))]))
    });
}

fn add(inputs: &Fields) -> EvalResult {
    let mut total: i64 = 0;
    for name in ["a", "b"] {
        if let Some(v) = inputs.get(name) {
            total += v.trim().parse::<i64>()?;
        }
    }
    Ok(outputs(&[("sum", total.to_string())]))
}

#[test]
fn sum_cases() {
    check_goldens("sum", &["a", "b"], &["sum"], add);
}
