//! Per-case execution and suite orchestration
//!
//! Each case spawns the binary under test with a single argument (the
//! fixture input path), buffers its entire standard output, and compares it
//! against the golden file with exact byte equality. Cases run strictly
//! sequentially; one child process at a time, fully awaited before the next
//! fixture begins.

use std::fs;
use std::io;
use std::process::Command;

use super::config::HarnessConfig;
use super::error::HarnessError;
use super::fixture::{Fixture, discover_fixtures};
use super::report::Reporter;

/// Outcome of a single fixture comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Captured stdout was byte-identical to the golden file.
    Passed,
    /// Captured stdout differed from the golden file.
    Failed,
}

/// One entry in a suite report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    /// Fixture input file name (e.g. `a.cnf`).
    pub fixture: String,
    pub outcome: CaseOutcome,
}

/// Collected outcomes of a completed suite run.
#[derive(Debug, Default)]
pub struct SuiteReport {
    /// Per-fixture records in execution (sorted) order.
    pub cases: Vec<CaseRecord>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.cases
            .iter()
            .filter(|c| c.outcome == CaseOutcome::Passed)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.cases
            .iter()
            .filter(|c| c.outcome == CaseOutcome::Failed)
            .count()
    }
}

/// Run a single fixture against the binary under test.
///
/// ## Errors
///
/// - `HarnessError::Execution` if the binary cannot be launched or exits
///   with a non-zero status (a harness error, not a test failure).
/// - `HarnessError::FixtureMissing` if the golden file is absent.
/// - `HarnessError::Io` for any other failure reading the golden file.
pub fn run_case(config: &HarnessConfig, fixture: &Fixture) -> Result<CaseOutcome, HarnessError> {
    let command = format!(
        "{} {}",
        config.executable.display(),
        fixture.input.display()
    );
    tracing::debug!(%command, "spawning binary under test");

    let output = Command::new(&config.executable)
        .arg(&fixture.input)
        .output()
        .map_err(|e| HarnessError::Execution {
            command: command.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            format!("{} ({})", output.status, stderr.trim())
        };
        return Err(HarnessError::Execution { command, reason });
    }

    let golden = match fs::read(&fixture.golden) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(HarnessError::FixtureMissing {
                path: fixture.golden.clone(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    // Exact byte equality: no trimming, no newline normalization
    if output.stdout == golden {
        Ok(CaseOutcome::Passed)
    } else {
        Ok(CaseOutcome::Failed)
    }
}

/// Run every fixture in the configured directory, in sorted order.
///
/// A `Failed` outcome never stops the suite; any `HarnessError` aborts it
/// immediately, leaving the remaining fixtures unprocessed. Outcomes are
/// handed to the reporter as each case completes and collected into the
/// returned report for library callers.
pub fn run_suite(
    config: &HarnessConfig,
    reporter: &mut dyn Reporter,
) -> Result<SuiteReport, HarnessError> {
    let fixtures = discover_fixtures(config)?;
    reporter.on_collection_complete(fixtures.len());

    let mut report = SuiteReport::default();
    for fixture in &fixtures {
        reporter.on_case_start(fixture);
        let outcome = run_case(config, fixture)?;
        reporter.on_case_complete(fixture, outcome);
        report.cases.push(CaseRecord {
            fixture: fixture.name.clone(),
            outcome,
        });
    }

    Ok(report)
}
