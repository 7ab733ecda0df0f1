//! Role parser
//!
//! Resolves the roles of an authenticated caller. The decision order is:
//!
//! 1. A subject is supplied and the source consults it: subject extraction,
//!    by classifier when one is configured, otherwise every principal
//!    except the identity.
//! 2. Otherwise: the configured role attribute of the assertion.
//!
//! # Example
//!
//! ```rust
//! use rolegate_core::{Assertion, Principal, Subject};
//! use rolegate_roles::{DefaultRoleParser, RoleParser};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = DefaultRoleParser::builder()
//!     .role_classifier("ROLE_")
//!     .role_classifier_type("prefix")?
//!     .build()?;
//!
//! let identity = Principal::user("alice");
//! let subject = Subject::new()
//!     .with_principal(identity.clone())
//!     .with_principal(Principal::typed("ROLE_ADMIN", "group"))
//!     .with_principal(Principal::typed("staff", "group"));
//!
//! let roles = parser.parse_roles(&identity, Some(&subject), &Assertion::new("_a1"))?;
//! assert_eq!(roles.names(), vec!["ROLE_ADMIN"]);
//! # Ok(())
//! # }
//! ```

mod builder;


pub use builder::RoleParserBuilder;

use crate::config::{RoleParserConfig, RoleSource};
use crate::error::{Result, RoleError};
use crate::extractor::{ClaimsRoleExtractor, IdentityExclusion, SubjectRoleExtractor};
use crate::role_set::RoleSet;
use rolegate_core::{AttributeSource, ClaimCollection, Principal, Subject};
use tracing::{debug, info};

/// Resolves the roles held by the caller of a validated assertion
pub trait RoleParser: Send + Sync {
    /// Return the roles of `identity`
    ///
    /// # Arguments
    ///
    /// * `identity` - The principal the assertion was issued for
    /// * `subject` - Login subject from a prior authentication step, if any
    /// * `assertion` - The validated assertion
    ///
    /// # Errors
    ///
    /// Fails only when the assertion cannot be read. Missing roles yield an
    /// empty set.
    fn parse_roles(
        &self,
        identity: &Principal,
        subject: Option<&Subject>,
        assertion: &dyn AttributeSource,
    ) -> Result<RoleSet>;
}

/// Default role parser
///
/// Immutable once built; clone or share it behind an `Arc` across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultRoleParser {
    source: RoleSource,
}

impl DefaultRoleParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a parser from the default configuration
    pub fn builder() -> RoleParserBuilder {
        RoleParserBuilder::new()
    }

    /// Create a parser with a pre-resolved role source
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the source's claim selector has a
    /// blank attribute name or an empty name format.
    pub fn with_source(source: RoleSource) -> Result<Self> {
        source.validate()?;
        info!("Role parser configured: {}", source);
        Ok(Self { source })
    }

    /// Validate a configuration and build a parser from it
    pub fn from_config(config: &RoleParserConfig) -> Result<Self> {
        Self::with_source(config.resolve_source()?)
    }

    /// The resolved role source
    pub fn source(&self) -> &RoleSource {
        &self.source
    }

    fn parse_claims_roles(&self, assertion: &dyn AttributeSource) -> Result<RoleSet> {
        let claims = ClaimCollection::from_source(assertion)?;
        let roles = self.source.claim_selector().extract(&claims);
        debug!(
            "Resolved {} roles from {} assertion claims",
            roles.len(),
            claims.len()
        );
        Ok(roles)
    }
}

impl RoleParser for DefaultRoleParser {
    fn parse_roles(
        &self,
        identity: &Principal,
        subject: Option<&Subject>,
        assertion: &dyn AttributeSource,
    ) -> Result<RoleSet> {
        let roles = match (&self.source, subject) {
            (RoleSource::SubjectClassifier { classifier, .. }, Some(subject)) => {
                debug!("Resolving roles of {} from subject with {}", identity, classifier);
                classifier.extract(identity, subject)
            }
            (RoleSource::SubjectDefault { .. }, Some(subject)) => {
                debug!("Resolving roles of {} from subject principals", identity);
                IdentityExclusion.extract(identity, subject)
            }
            _ => {
                debug!("Resolving roles of {} from assertion claims", identity);
                return self.parse_claims_roles(assertion);
            }
        };

        debug!("Resolved {} roles from subject", roles.len());
        Ok(roles)
    }
}

impl TryFrom<RoleParserConfig> for DefaultRoleParser {
    type Error = RoleError;

    fn try_from(config: RoleParserConfig) -> Result<Self> {
        Self::from_config(&config)
    }
}

impl RoleParserConfig {
    /// Validate this configuration and build a parser from it
    pub fn into_parser(self) -> Result<DefaultRoleParser> {
        DefaultRoleParser::try_from(self)
    }
}
