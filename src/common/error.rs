//! Error types for pagesim.

use thiserror::Error;

use crate::sim::TraceViolation;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All recoverable errors in pagesim.
///
/// The simulation core itself never fails on a well-formed [`Task`]; these
/// errors come from the collaborators around it (task construction, file
/// parsing, the file runner).
///
/// [`Task`]: crate::task::Task
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading task files or writing reports.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Page count or frame count is zero, or an access is outside `1..=pages`.
    #[error("Invalid task: {0}")]
    InvalidTask(String),

    /// A task file is malformed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A policy produced a trace the validator rejected.
    ///
    /// This indicates a bug in a policy implementation.
    #[error("Invalid trace: {0}")]
    InvalidTrace(#[from] TraceViolation),
}

impl Error {
    /// Shorthand for building a parse error.
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidTask("frame count must be positive".into());
        assert_eq!(format!("{}", err), "Invalid task: frame count must be positive");

        let err = Error::parse(3, "expected two integers");
        assert_eq!(format!("{}", err), "Parse error on line 3: expected two integers");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::other("boom");
        let err = Error::from(io_err);
        assert!(err.source().is_some());
        assert!(Error::InvalidTask("x".into()).source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
