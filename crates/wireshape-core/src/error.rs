//! Error types for the Wireshape core library
//!
//! This module defines the error taxonomy shared by every type
//! specification, using thiserror for ergonomic error definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for conversion operations
///
/// Errors raised by a delegate specification during element-wise conversion
/// propagate through unchanged; no variant here wraps another `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Value did not match the declared shape under a strict strictness flag
    #[error("{message}")]
    ShapeMismatch { message: String },

    /// Named element descriptor has no entry in the composite type table
    #[error("{message}")]
    MissingTypeDefinition { type_name: String, message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Severity levels for diagnostics emitted during conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Informational, no action required
    Info,
    /// Warning, should be reviewed
    Warning,
    /// Error, operation will fail
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_message() {
        let err = Error::ShapeMismatch {
            message: "expected an Array at $.items, found 42".to_string(),
        };
        assert_eq!(err.to_string(), "expected an Array at $.items, found 42");
    }

    #[test]
    fn test_missing_type_definition_carries_name() {
        let err = Error::MissingTypeDefinition {
            type_name: "Widget".to_string(),
            message: "no entry for Widget".to_string(),
        };
        if let Error::MissingTypeDefinition { type_name, .. } = &err {
            assert_eq!(type_name, "Widget");
        } else {
            panic!("Expected MissingTypeDefinition");
        }
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }
}
