//! Harness configuration
//!
//! All paths and extensions the runner depends on live here, passed
//! explicitly into discovery and execution instead of being read from
//! process-wide state. Defaults reproduce the conventional layout: the
//! `one_symmetry` binary and a `test_cnfs` directory next to it.

use std::path::PathBuf;

/// Configuration for a suite run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Binary under test, invoked with one argument (the input file path).
    pub executable: PathBuf,
    /// Directory holding the fixture pairs.
    pub fixture_dir: PathBuf,
    /// File-name extension of input files (without the dot).
    pub input_ext: String,
    /// File-name extension of golden files (without the dot).
    pub golden_ext: String,
}

impl HarnessConfig {
    /// Create a configuration with the standard `.cnf`/`.log` extension pair.
    pub fn new(executable: impl Into<PathBuf>, fixture_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            fixture_dir: fixture_dir.into(),
            ..Self::default()
        }
    }

    /// File-name suffix of input files, including the dot (e.g. `.cnf`).
    pub fn input_suffix(&self) -> String {
        format!(".{}", self.input_ext)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("./one_symmetry"),
            fixture_dir: PathBuf::from("./test_cnfs"),
            input_ext: "cnf".to_string(),
            golden_ext: "log".to_string(),
        }
    }
}
