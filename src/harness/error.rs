//! Harness error taxonomy
//!
//! Only genuine environmental failures are errors: a fixture whose output
//! differs from its golden file is a test failure, not a `HarnessError`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a suite run.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A discovered input file has no matching golden file.
    #[error("missing golden file: {}", .path.display())]
    FixtureMissing { path: PathBuf },

    /// The binary under test could not be launched, or exited non-zero.
    #[error("failed to execute '{command}': {reason}")]
    Execution { command: String, reason: String },

    /// Filesystem failure while enumerating or reading fixtures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fixture_missing() {
        let err = HarnessError::FixtureMissing {
            path: PathBuf::from("test_cnfs/a.log"),
        };
        assert_eq!(err.to_string(), "missing golden file: test_cnfs/a.log");
    }

    #[test]
    fn test_display_execution() {
        let err = HarnessError::Execution {
            command: "./one_symmetry test_cnfs/a.cnf".to_string(),
            reason: "exit status: 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to execute './one_symmetry test_cnfs/a.cnf': exit status: 1"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HarnessError = io.into();
        assert!(matches!(err, HarnessError::Io(_)));
    }
}
