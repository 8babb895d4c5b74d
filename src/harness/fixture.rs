//! Fixture pairing and directory discovery
//!
//! A fixture is a pair of files in the fixture directory sharing a base
//! name: `{name}.cnf` (the input handed to the binary under test) and
//! `{name}.log` (the golden standard-output text). Discovery only inspects
//! file names; the golden file's existence is checked when the case runs,
//! so a missing golden aborts at the same point in the sequence where the
//! fixture would have been compared.

use std::fs;
use std::path::PathBuf;

use super::config::HarnessConfig;
use super::error::HarnessError;

/// A discovered fixture pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Input file name including extension (e.g. `a.cnf`), as reported.
    pub name: String,
    /// Full path of the input file.
    pub input: PathBuf,
    /// Full path of the expected-output file.
    pub golden: PathBuf,
}

/// Enumerate the fixture directory and pair inputs with their golden files.
///
/// Entries whose name does not end with the input suffix (literally
/// `.cnf` by default - the match is on the name, not a parsed extension)
/// are skipped silently. Results are sorted by file name so runs are
/// reproducible regardless of filesystem enumeration order.
///
/// ## Errors
///
/// Returns `HarnessError::Io` if the directory cannot be enumerated.
pub fn discover_fixtures(config: &HarnessConfig) -> Result<Vec<Fixture>, HarnessError> {
    let suffix = config.input_suffix();
    let mut fixtures = Vec::new();

    for entry in fs::read_dir(&config.fixture_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::debug!(entry = ?file_name, "skipping non-UTF-8 entry name");
            continue;
        };
        if !name.ends_with(&suffix) {
            tracing::debug!(entry = name, "skipping non-fixture entry");
            continue;
        }

        let stem = &name[..name.len() - suffix.len()];
        fixtures.push(Fixture {
            name: name.to_string(),
            input: config.fixture_dir.join(name),
            golden: config
                .fixture_dir
                .join(format!("{}.{}", stem, config.golden_ext)),
        });
    }

    fixtures.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(fixtures)
}
