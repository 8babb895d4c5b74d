//! Suite reporting
//!
//! The runner hands outcomes to a `Reporter` as each case completes,
//! separating output formatting from execution. Implement the trait to
//! customize the output format (JSON, TAP, etc.).

use super::fixture::Fixture;
use super::runner::CaseOutcome;

/// Trait for reporting suite execution results.
pub trait Reporter {
    /// Called once after discovery, before any case runs.
    fn on_collection_complete(&mut self, _fixture_count: usize) {}

    /// Called immediately before a fixture is run.
    fn on_case_start(&mut self, _fixture: &Fixture) {}

    /// Called when a fixture comparison completes.
    fn on_case_complete(&mut self, fixture: &Fixture, outcome: CaseOutcome);
}

/// Default console reporter.
///
/// Prints one line per fixture to stdout; verbose chatter goes to stderr so
/// the result stream stays clean.
#[derive(Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn on_collection_complete(&mut self, fixture_count: usize) {
        if fixture_count == 0 {
            eprintln!("No fixtures collected");
        }
    }

    fn on_case_start(&mut self, fixture: &Fixture) {
        if self.verbose {
            eprintln!("running {}", fixture.input.display());
        }
    }

    fn on_case_complete(&mut self, fixture: &Fixture, outcome: CaseOutcome) {
        match outcome {
            CaseOutcome::Passed => println!("Test on {} successful!", fixture.name),
            CaseOutcome::Failed => println!("Test on {} failed.", fixture.name),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Reporter that records callback invocations for assertions.
    struct RecordingReporter {
        collected: Option<usize>,
        events: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn on_collection_complete(&mut self, fixture_count: usize) {
            self.collected = Some(fixture_count);
        }

        fn on_case_complete(&mut self, fixture: &Fixture, outcome: CaseOutcome) {
            self.events.push(format!("{}:{:?}", fixture.name, outcome));
        }
    }

    fn fixture(name: &str) -> Fixture {
        Fixture {
            name: name.to_string(),
            input: PathBuf::from("test_cnfs").join(name),
            golden: PathBuf::from("test_cnfs/a.log"),
        }
    }

    #[test]
    fn test_trait_default_hooks_are_optional() {
        // A reporter only implementing on_case_complete still compiles and
        // receives the required callbacks.
        let mut reporter = RecordingReporter {
            collected: None,
            events: Vec::new(),
        };
        reporter.on_collection_complete(2);
        reporter.on_case_start(&fixture("a.cnf"));
        reporter.on_case_complete(&fixture("a.cnf"), CaseOutcome::Passed);
        reporter.on_case_complete(&fixture("b.cnf"), CaseOutcome::Failed);

        assert_eq!(reporter.collected, Some(2));
        assert_eq!(reporter.events, ["a.cnf:Passed", "b.cnf:Failed"]);
    }

    #[test]
    fn test_console_reporter_verbosity_flag() {
        assert!(!ConsoleReporter::default().verbose);
        assert!(ConsoleReporter::new(true).verbose);
    }
}
