//! Shared helpers for integration tests.

use goldish::{EvalResult, Fields, HarnessConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway testdata directory holding one case file.
pub struct Fixture {
    pub dir: TempDir,
    pub name: &'static str,
}

impl Fixture {
    pub fn new(name: &'static str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let fixture = Self { dir, name };
        fs::write(fixture.path(), contents).expect("write case file");
        fixture
    }

    pub fn config(&self, update: bool) -> HarnessConfig {
        HarnessConfig::default()
            .with_testdata_dir(self.dir.path())
            .with_update(update)
    }

    pub fn path(&self) -> PathBuf {
        self.config(false).case_path(self.name)
    }

    pub fn contents(&self) -> String {
        fs::read_to_string(self.path()).expect("read case file")
    }
}

/// `sum = a + 1`
#[allow(dead_code)]
pub fn add_one(inputs: &Fields) -> EvalResult {
    let a: i64 = inputs.get("a").map_or(Ok(0), |v| v.parse())?;
    let mut out = Fields::new();
    out.insert("sum".into(), (a + 1).to_string());
    Ok(out)
}
