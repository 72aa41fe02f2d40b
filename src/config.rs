//! Harness configuration.
//!
//! The update/verify switch is read once per process and then passed to the
//! harness as a plain value. Nothing in the harness reads the environment.

use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

/// Set to `1`, `true` or `yes` to rewrite golden files instead of checking them.
pub const UPDATE_ENV: &str = "GOLDISH_UPDATE";

pub const DEFAULT_TESTDATA_DIR: &str = "testdata";
pub const DEFAULT_SUFFIX: &str = "_cases.txt";

const UPDATE_FLAGS: [&str; 2] = ["-update", "--update"];

static GLOBAL: Lazy<HarnessConfig> = Lazy::new(HarnessConfig::from_env);

/// Explicit harness settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Rewrite case files with computed outputs instead of comparing.
    pub update: bool,
    pub testdata_dir: PathBuf,
    /// Appended to the test name to form the file name.
    pub suffix: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            update: false,
            testdata_dir: PathBuf::from(DEFAULT_TESTDATA_DIR),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Verify-mode config with default paths.
    pub fn verify() -> Self {
        Self::default()
    }

    /// Update-mode config with default paths.
    pub fn update() -> Self {
        Self {
            update: true,
            ..Self::default()
        }
    }

    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    pub fn with_testdata_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.testdata_dir = dir.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Builds a config from the process arguments and environment.
    ///
    /// Under `cargo test`, libtest rejects unknown flags before any test runs,
    /// so `-update`/`--update` only take effect in custom harnesses
    /// (`harness = false`). For ordinary `#[test]` functions use
    /// `GOLDISH_UPDATE=1 cargo test`.
    pub fn from_env() -> Self {
        Self::from_sources(std::env::args().skip(1), |name| std::env::var(name).ok())
    }

    /// Builds a config from explicit argument and variable sources.
    pub fn from_sources<I, S, F>(args: I, var: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let flag = args
            .into_iter()
            .any(|arg| UPDATE_FLAGS.contains(&arg.as_ref()));
        let env = var(UPDATE_ENV).map_or(false, |v| is_truthy(&v));

        Self::default().with_update(flag || env)
    }

    /// The process-wide config, assembled on first use.
    pub fn global() -> &'static HarnessConfig {
        &GLOBAL
    }

    /// `<testdata_dir>/<test_name><suffix>`
    pub fn case_path(&self, test_name: &str) -> PathBuf {
        self.testdata_dir.join(format!("{}{}", test_name, self.suffix))
    }

    /// True when `path` has this config's suffix.
    pub fn is_case_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map_or(false, |n| n.ends_with(&self.suffix))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
