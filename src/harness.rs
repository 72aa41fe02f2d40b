//! Golden test harness.
//!
//! Each case in a case file is split into inputs and golden outputs, the
//! inputs go through a user evaluator, and the computed outputs are either
//! compared with the golden ones (verify mode) or written back over them
//! (update mode).
//!
//! # Outcomes
//!
//! - **Fatal** (`Err(GoldishError)`): I/O failure, evaluator failure, or an
//!   evaluator returning a key outside `out_keys`. Processing stops at once and
//!   the case file is not written.
//! - **Recorded** ([`RunReport::mismatches`]): a case whose computed outputs
//!   differ from its golden outputs. The remaining cases are still evaluated.
//!
//! # Example
//!
//! ```rust,no_run
//! use goldish::{check_goldens, Fields};
//!
//! #[test]
//! fn sum() {
//!     check_goldens("sum", &["a", "b"], &["sum"], |inputs| {
//!         let a: i64 = inputs.get("a").map_or(Ok(0), |v| v.parse())?;
//!         let b: i64 = inputs.get("b").map_or(Ok(0), |v| v.parse())?;
//!         let mut out = Fields::new();
//!         out.insert("sum".into(), (a + b).to_string());
//!         Ok(out)
//!     });
//! }
//! ```

pub mod report;
pub mod store;

use crate::case::Fields;
use crate::config::HarnessConfig;
use crate::errors::{BoxError, GoldishError, Result};
use crate::syntax::{parse_reader, serialize};
use std::path::PathBuf;
use store::{CaseStore, FsStore};
use tracing::{debug, info, warn};

pub use report::{print_report, render_mismatch, render_report};
pub use store::MemoryStore;

/// What an evaluator returns: computed outputs, or a failure that aborts the run.
pub type EvalResult = std::result::Result<Fields, BoxError>;

// =============================================================================
// CORE TYPES
// =============================================================================

/// A case whose computed outputs differ from its golden outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 0-based position of the case in the file.
    pub index: usize,
    pub comment: String,
    /// Golden outputs read from the file.
    pub saved: Fields,
    /// Outputs returned by the evaluator.
    pub computed: Fields,
}

/// Result of a run that was not aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub test_name: String,
    pub path: PathBuf,
    /// Number of cases evaluated.
    pub cases: usize,
    /// Always empty in update mode.
    pub mismatches: Vec<Mismatch>,
    /// True when the case file was rewritten.
    pub updated: bool,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Runs the golden test `test_name` against its case file.
///
/// `in_keys` followed by `out_keys` is the field order used when the file is
/// rewritten; fields named in neither list are dropped on rewrite.
pub fn run<S, F>(
    config: &HarnessConfig,
    mut store: S,
    test_name: &str,
    in_keys: &[&str],
    out_keys: &[&str],
    mut evaluator: F,
) -> Result<RunReport>
where
    S: CaseStore,
    F: FnMut(&Fields) -> EvalResult,
{
    let path = config.case_path(test_name);
    let bytes = store
        .read(&path)
        .map_err(|e| GoldishError::read(&path, e))?;
    let mut cases = parse_reader(bytes.as_slice()).map_err(|e| GoldishError::read(&path, e))?;
    debug!(
        test = test_name,
        path = %path.display(),
        cases = cases.len(),
        update = config.update,
        "loaded case file"
    );

    let mut mismatches = Vec::new();
    for (index, case) in cases.iter_mut().enumerate() {
        let saved = case.take_fields(out_keys);

        debug!(test = test_name, case = index, "evaluating case");
        let computed = evaluator(&case.fields).map_err(|source| GoldishError::Evaluator {
            test: test_name.to_string(),
            case: index,
            source,
        })?;

        if let Some(key) = computed.keys().find(|k| !out_keys.contains(&k.as_str())) {
            return Err(GoldishError::unknown_output_key(test_name, index, key, out_keys));
        }
        case.merge_fields(&computed);

        if !config.update && saved != computed {
            warn!(test = test_name, case = index, "computed outputs differ from golden outputs");
            mismatches.push(Mismatch {
                index,
                comment: case.comment.clone(),
                saved,
                computed,
            });
        }
    }

    let mut report = RunReport {
        test_name: test_name.to_string(),
        path,
        cases: cases.len(),
        mismatches,
        updated: false,
    };
    if !config.update {
        return Ok(report);
    }

    let key_order: Vec<&str> = in_keys.iter().chain(out_keys).copied().collect();
    let text = serialize(&cases, &key_order);
    store
        .write(&report.path, text.as_bytes())
        .map_err(|e| GoldishError::io(&report.path, e))?;
    info!(
        test = test_name,
        path = %report.path.display(),
        cases = report.cases,
        "rewrote golden file"
    );
    report.updated = true;
    Ok(report)
}

/// `#[test]`-facing wrapper around [`run`].
///
/// Uses [`HarnessConfig::global`] and the real file system. Panics with the
/// error on fatal failures. When any case mismatched, the colored report goes
/// to stderr and the panic carries the plain rendering.
pub fn check_goldens<F>(test_name: &str, in_keys: &[&str], out_keys: &[&str], evaluator: F)
where
    F: FnMut(&Fields) -> EvalResult,
{
    check_goldens_with(HarnessConfig::global(), test_name, in_keys, out_keys, evaluator)
}

/// [`check_goldens`] with an explicit config.
pub fn check_goldens_with<F>(
    config: &HarnessConfig,
    test_name: &str,
    in_keys: &[&str],
    out_keys: &[&str],
    evaluator: F,
) where
    F: FnMut(&Fields) -> EvalResult,
{
    match run(config, FsStore, test_name, in_keys, out_keys, evaluator) {
        Ok(report) if report.is_success() => {}
        Ok(report) => {
            print_report(&report);
            panic!("\n{}", render_report(&report))
        }
        Err(e) => panic!("{:?}", miette::Report::new(e)),
    }
}
