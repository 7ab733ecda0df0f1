//! Claims-based role extraction

use crate::config::DEFAULT_ROLE_ATTRIBUTE_NAME;
use crate::error::{Result, RoleError};
use crate::role_set::RoleSet;
use rolegate_core::{Claim, ClaimCollection, Principal};
use tracing::debug;

/// Turns assertion claims into role principals
pub trait ClaimsRoleExtractor: Send + Sync {
    fn extract(&self, claims: &ClaimCollection) -> RoleSet;
}

/// Selects the role claim by attribute name and, optionally, name format
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClaimSelector {
    attribute_name: String,
    name_format: Option<String>,
}

impl ClaimSelector {
    /// Select claims of `attribute_name` in any name format
    pub fn new(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            name_format: None,
        }
    }

    /// Also require the given name format
    pub fn with_name_format(mut self, name_format: impl Into<String>) -> Self {
        self.name_format = Some(name_format.into());
        self
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn name_format(&self) -> Option<&str> {
        self.name_format.as_deref()
    }

    /// Reject selectors that can never match a role attribute
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the attribute name is blank or the
    /// name format is set but empty.
    pub fn validate(&self) -> Result<()> {
        if self.attribute_name.trim().is_empty() {
            return Err(RoleError::configuration(
                "Role attribute name cannot be empty",
            ));
        }
        if self.name_format.as_deref() == Some("") {
            return Err(RoleError::configuration(
                "Role attribute name format cannot be empty",
            ));
        }
        Ok(())
    }

    /// Check whether a claim carries roles under this selector
    pub fn matches(&self, claim: &Claim) -> bool {
        if claim.claim_type != self.attribute_name {
            return false;
        }
        match self.name_format.as_deref() {
            None => true,
            Some(format) => claim.name_format.as_deref() == Some(format),
        }
    }
}

impl Default for ClaimSelector {
    fn default() -> Self {
        Self::new(DEFAULT_ROLE_ATTRIBUTE_NAME)
    }
}

impl ClaimsRoleExtractor for ClaimSelector {
    fn extract(&self, claims: &ClaimCollection) -> RoleSet {
        let mut roles = RoleSet::new();
        for claim in claims.find(&self.attribute_name) {
            if !self.matches(claim) {
                debug!(
                    "Role attribute {} ignored: name format {:?} does not match {:?}",
                    self.attribute_name, claim.name_format, self.name_format
                );
                continue;
            }
            for value in &claim.values {
                roles.insert(Principal::role(value.clone()));
            }
        }
        roles
    }
}
