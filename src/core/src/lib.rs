//! # Rolegate Core
//!
//! Shared types, traits, and error handling for role resolution.
//! This package holds the inputs handed to the role parser by its collaborators:
//! the authenticated identity, the optional login subject, and the already
//! validated assertion.

pub mod types;
pub mod traits;
pub mod error;

// Re-export commonly used types
pub use error::{AssertionReadError, Result};
pub use traits::AttributeSource;
pub use types::{
    Assertion, Attribute, AttributeStatement, Claim, ClaimCollection, Principal, SamlVersion,
    Subject,
};
