//! Role extractors
//!
//! Read-only helpers the role parser delegates to:
//!
//! - [`SubjectRoleExtractor`]: picks roles out of a login subject
//!   ([`IdentityExclusion`] and [`crate::RoleClassifier`])
//! - [`ClaimsRoleExtractor`]: turns assertion claims into roles ([`ClaimSelector`])

pub mod claims;
pub mod subject;

pub use claims::{ClaimSelector, ClaimsRoleExtractor};
pub use subject::{IdentityExclusion, SubjectRoleExtractor};
