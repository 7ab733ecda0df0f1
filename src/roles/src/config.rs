//! Role parser configuration
//!
//! [`RoleParserConfig`] is the settable surface (serde friendly, every field
//! defaulted). It is validated once into a [`RoleSource`], which is all the
//! parser consults at resolution time.

use crate::classifier::{ClassifierKind, RoleClassifier};
use crate::error::{Result, RoleError};
use crate::extractor::ClaimSelector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Attribute holding role values when no other name is configured
pub const DEFAULT_ROLE_ATTRIBUTE_NAME: &str =
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/role";

/// Role parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleParserConfig {
    /// Take roles from the login subject when one is supplied
    pub use_subject_roles: bool,

    /// Subject role classifier; unset or empty selects the default
    /// identity-exclusion extraction
    pub role_classifier: Option<String>,

    /// Matching rule for `role_classifier`
    pub role_classifier_type: ClassifierKind,

    /// Assertion attribute holding role values
    pub role_attribute_name: String,

    /// Required name format of the role attribute; unset matches any
    pub role_attribute_name_format: Option<String>,
}

impl Default for RoleParserConfig {
    fn default() -> Self {
        Self {
            use_subject_roles: true,
            role_classifier: None,
            role_classifier_type: ClassifierKind::Prefix,
            role_attribute_name: DEFAULT_ROLE_ATTRIBUTE_NAME.to_string(),
            role_attribute_name_format: None,
        }
    }
}

impl RoleParserConfig {
    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| RoleError::configuration(format!("Invalid role parser config: {}", e)))
    }

    /// Load a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Validate the configuration and resolve the role source
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the role attribute name is empty.
    pub fn resolve_source(&self) -> Result<RoleSource> {
        let mut selector = ClaimSelector::new(self.role_attribute_name.clone());
        if let Some(format) = self.role_attribute_name_format.as_deref() {
            if !format.is_empty() {
                selector = selector.with_name_format(format);
            }
        }
        selector.validate()?;

        if !self.use_subject_roles {
            return Ok(RoleSource::ClaimsBased(selector));
        }

        match self.role_classifier.as_deref() {
            Some(value) if !value.is_empty() => Ok(RoleSource::SubjectClassifier {
                classifier: RoleClassifier::new(self.role_classifier_type, value)?,
                fallback: selector,
            }),
            _ => Ok(RoleSource::SubjectDefault { fallback: selector }),
        }
    }
}

/// Where roles come from, fixed when the parser is built
///
/// The subject variants apply only when a subject is supplied; without one
/// the parser reads the assertion through the fallback selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSource {
    /// Every subject principal except the identity
    SubjectDefault { fallback: ClaimSelector },

    /// Subject principals matching the classifier
    SubjectClassifier {
        classifier: RoleClassifier,
        fallback: ClaimSelector,
    },

    /// Role attribute of the assertion, regardless of any subject
    ClaimsBased(ClaimSelector),
}

impl RoleSource {
    /// Selector used when roles are read from the assertion
    pub fn claim_selector(&self) -> &ClaimSelector {
        match self {
            RoleSource::SubjectDefault { fallback } => fallback,
            RoleSource::SubjectClassifier { fallback, .. } => fallback,
            RoleSource::ClaimsBased(selector) => selector,
        }
    }

    /// Check the selector of a hand-built source
    ///
    /// # Errors
    ///
    /// See [`ClaimSelector::validate`].
    pub fn validate(&self) -> Result<()> {
        self.claim_selector().validate()
    }

    /// Whether a supplied subject is consulted
    pub fn uses_subject(&self) -> bool {
        !matches!(self, RoleSource::ClaimsBased(_))
    }
}

impl Default for RoleSource {
    fn default() -> Self {
        RoleSource::SubjectDefault {
            fallback: ClaimSelector::default(),
        }
    }
}

impl fmt::Display for RoleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleSource::SubjectDefault { fallback } => {
                write!(f, "subject-default (fallback claims: {})", fallback.attribute_name())
            }
            RoleSource::SubjectClassifier { classifier, fallback } => write!(
                f,
                "subject-classifier {} (fallback claims: {})",
                classifier,
                fallback.attribute_name()
            ),
            RoleSource::ClaimsBased(selector) => {
                write!(f, "claims {}", selector.attribute_name())
            }
        }
    }
}
