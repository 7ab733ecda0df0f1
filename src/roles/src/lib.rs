//! # Rolegate Role Resolution
//!
//! Determines the roles held by the caller of an authenticated request from
//! either the login subject attached by a prior authentication step or the
//! role attribute of the validated assertion.
//!
//! ## Strategies
//!
//! - **Subject, default**: every subject principal except the identity itself
//! - **Subject, classifier**: subject principals matching a name prefix or type name
//! - **Claims**: values of the configured role attribute of the assertion
//!
//! The strategy is fixed when the parser is built; see [`RoleSource`].
//!
//! ## Example
//!
//! ```rust
//! use rolegate_core::{Assertion, Attribute, Principal};
//! use rolegate_roles::{DefaultRoleParser, RoleParser, DEFAULT_ROLE_ATTRIBUTE_NAME};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = DefaultRoleParser::builder()
//!     .use_subject_roles(false)
//!     .build()?;
//!
//! let assertion = Assertion::new("_a1")
//!     .with_attribute(Attribute::new(DEFAULT_ROLE_ATTRIBUTE_NAME, ["admin", "auditor"]));
//!
//! let roles = parser.parse_roles(&Principal::user("alice"), None, &assertion)?;
//!
//! assert!(roles.has_role("admin"));
//! assert!(roles.has_role("auditor"));
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod role_set;

// Re-export commonly used types
pub use classifier::{ClassifierKind, RoleClassifier};
pub use config::{RoleParserConfig, RoleSource, DEFAULT_ROLE_ATTRIBUTE_NAME};
pub use error::{Result, RoleError};
pub use extractor::{ClaimSelector, ClaimsRoleExtractor, IdentityExclusion, SubjectRoleExtractor};
pub use parser::{DefaultRoleParser, RoleParser, RoleParserBuilder};
pub use role_set::RoleSet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
