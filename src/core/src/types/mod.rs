//! Shared types for role resolution

pub mod principal;
pub mod subject;
pub mod assertion;
pub mod claims;

// Re-export commonly used types
pub use principal::Principal;
pub use subject::Subject;
pub use assertion::{Assertion, Attribute, AttributeStatement, SamlVersion};
pub use claims::{Claim, ClaimCollection};
