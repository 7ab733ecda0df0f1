//! Error types for role resolution

use rolegate_core::AssertionReadError;
use thiserror::Error;

/// Role resolution errors
///
/// Resolution itself never fails for lack of roles; an empty
/// [`crate::RoleSet`] is the answer in that case.
#[derive(Debug, Error)]
pub enum RoleError {
    /// Invalid parser configuration, reported when the configuration is set
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The assertion could not be read
    #[error("Assertion read error: {0}")]
    AssertionRead(#[from] AssertionReadError),

    /// I/O error while loading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RoleError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        RoleError::Configuration(msg.into())
    }
}

/// Result type for role resolution
pub type Result<T> = std::result::Result<T, RoleError>;
