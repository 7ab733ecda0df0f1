//! Subject role classifiers
//!
//! A classifier picks role principals out of a login subject, either by a
//! name prefix (`ROLE_ADMIN` with prefix `ROLE_`) or by the principal's
//! declared type name.

use crate::error::{Result, RoleError};
use rolegate_core::Principal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Matching rule applied against the classifier value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClassifierKind {
    /// Principal name starts with the classifier value
    #[default]
    Prefix,
    /// Principal type name equals the classifier value
    TypeName,
}

impl ClassifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierKind::Prefix => "prefix",
            ClassifierKind::TypeName => "typename",
        }
    }
}

impl FromStr for ClassifierKind {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefix" => Ok(ClassifierKind::Prefix),
            // "classname" is the legacy spelling of the type name rule
            "typename" | "classname" => Ok(ClassifierKind::TypeName),
            other => Err(RoleError::configuration(format!(
                "Unknown role classifier type '{}', expected 'prefix' or 'typename'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ClassifierKind {
    type Error = RoleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClassifierKind> for String {
    fn from(kind: ClassifierKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier selecting role principals from a subject
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleClassifier {
    kind: ClassifierKind,
    value: String,
}

impl RoleClassifier {
    /// Create a classifier
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `value` is empty.
    pub fn new(kind: ClassifierKind, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(RoleError::configuration(
                "Role classifier value cannot be empty",
            ));
        }
        Ok(Self { kind, value })
    }

    pub fn kind(&self) -> ClassifierKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check whether a principal is a role under this classifier
    pub fn matches(&self, principal: &Principal) -> bool {
        match self.kind {
            ClassifierKind::Prefix => principal.name().starts_with(&self.value),
            ClassifierKind::TypeName => principal.type_name() == self.value,
        }
    }
}

impl fmt::Display for RoleClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}
