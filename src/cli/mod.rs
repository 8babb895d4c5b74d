//! CLI module for the cnfcheck harness
//!
//! This module provides the command-line interface for the golden-file
//! regression runner.
//!
//! ## Usage
//!
//! - `cnfcheck` - Run `./one_symmetry` over the fixtures in `./test_cnfs`
//! - `cnfcheck <EXECUTABLE>` - Run another binary over the same fixtures
//! - `cnfcheck <EXECUTABLE> --dir <DIR>` - Use a different fixture directory
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::harness::config::HarnessConfig;
use crate::harness::report::ConsoleReporter;
use crate::harness::runner::run_suite;
use crate::version::CNFCHECK_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Golden-file regression harness for CNF tools
#[derive(Parser, Debug)]
#[command(name = "cnfcheck")]
#[command(version = CNFCHECK_VERSION)]
#[command(about = "Golden-file regression harness for CNF tools", long_about = None)]
pub struct Cli {
    /// Binary under test, invoked as `EXECUTABLE <fixture>.cnf`
    #[arg(value_name = "EXECUTABLE", default_value = "./one_symmetry")]
    pub executable: PathBuf,

    /// Directory containing `.cnf` fixtures and `.log` golden files
    #[arg(long = "dir", value_name = "DIR", default_value = "./test_cnfs")]
    pub fixture_dir: PathBuf,

    /// Print each fixture invocation before running it
    #[arg(short, long)]
    pub verbose: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. The suite
/// execution returns `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the suite described by the parsed arguments.
///
/// Failed comparisons are reported per fixture and do not affect the exit
/// code; only harness errors (spawn failure, non-zero exit of the binary
/// under test, missing golden file, I/O) map to a nonzero exit.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = HarnessConfig::new(cli.executable, cli.fixture_dir);
    let mut reporter = ConsoleReporter::new(cli.verbose);

    run_suite(&config, &mut reporter)
        .map_err(|e| CliError::failure(format!("cnfcheck: error: {}", e)))?;

    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================
