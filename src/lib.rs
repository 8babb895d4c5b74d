#![forbid(unsafe_code)]
//! Golden-file regression harness for DIMACS-CNF command-line tools.
//!
//! `cnfcheck` runs a binary under test over every `.cnf` fixture in a
//! directory, captures its standard output, and compares it byte-for-byte
//! against a `.log` golden file with the same base name, printing one
//! pass/fail line per fixture.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `harness` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod harness;
pub mod version;

pub use harness::config::HarnessConfig;
pub use harness::error::HarnessError;
pub use harness::fixture::{Fixture, discover_fixtures};
pub use harness::report::{ConsoleReporter, Reporter};
pub use harness::runner::{CaseOutcome, CaseRecord, SuiteReport, run_case, run_suite};
