//! Error types for reading assertions
//!
//! Reading the attribute statements of an assertion is the only fallible
//! operation in the core types. Failures are surfaced to the role parser,
//! which propagates them unchanged.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssertionReadError>;

/// Failure to read attribute statements from an assertion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionReadError {
    /// An attribute inside a statement cannot be interpreted
    #[error("Malformed attribute in statement {statement}: {reason}")]
    MalformedAttribute {
        /// Index of the offending attribute statement
        statement: usize,
        /// Human readable description of the defect
        reason: String,
    },

    /// The underlying token could not be read at all
    #[error("Unreadable assertion: {0}")]
    Unreadable(String),
}

impl AssertionReadError {
    /// Create a malformed attribute error
    pub fn malformed<S: Into<String>>(statement: usize, reason: S) -> Self {
        AssertionReadError::MalformedAttribute {
            statement,
            reason: reason.into(),
        }
    }

    /// Create an unreadable assertion error
    pub fn unreadable<S: Into<String>>(msg: S) -> Self {
        AssertionReadError::Unreadable(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = AssertionReadError::malformed(2, "attribute name is empty");
        assert_eq!(
            err.to_string(),
            "Malformed attribute in statement 2: attribute name is empty"
        );
    }

    #[test]
    fn test_unreadable_display() {
        let err = AssertionReadError::unreadable("truncated token");
        assert_eq!(err.to_string(), "Unreadable assertion: truncated token");
    }
}
