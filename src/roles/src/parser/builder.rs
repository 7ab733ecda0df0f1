//! Builder for [`DefaultRoleParser`]

use super::DefaultRoleParser;
use crate::classifier::ClassifierKind;
use crate::config::RoleParserConfig;
use crate::error::Result;

/// Sets configuration fields independently before building a parser
#[derive(Debug, Clone, Default)]
pub struct RoleParserBuilder {
    config: RoleParserConfig,
}

impl RoleParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: RoleParserConfig) -> Self {
        Self { config }
    }

    /// Take roles from the login subject when one is supplied (default true)
    pub fn use_subject_roles(mut self, use_subject_roles: bool) -> Self {
        self.config.use_subject_roles = use_subject_roles;
        self
    }

    /// Select subject roles with a classifier instead of identity exclusion
    pub fn role_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.config.role_classifier = Some(classifier.into());
        self
    }

    pub fn role_classifier_kind(mut self, kind: ClassifierKind) -> Self {
        self.config.role_classifier_type = kind;
        self
    }

    /// Set the classifier rule by name (`prefix`, `typename` or `classname`)
    ///
    /// # Errors
    ///
    /// Returns a configuration error for any other name.
    pub fn role_classifier_type(self, kind: &str) -> Result<Self> {
        Ok(self.role_classifier_kind(kind.parse()?))
    }

    /// Assertion attribute holding role values
    pub fn role_attribute_name(mut self, name: impl Into<String>) -> Self {
        self.config.role_attribute_name = name.into();
        self
    }

    /// Required name format of the role attribute
    pub fn role_attribute_name_format(mut self, name_format: impl Into<String>) -> Self {
        self.config.role_attribute_name_format = Some(name_format.into());
        self
    }

    pub fn config(&self) -> &RoleParserConfig {
        &self.config
    }

    /// Validate the configuration and build the parser
    pub fn build(self) -> Result<DefaultRoleParser> {
        DefaultRoleParser::from_config(&self.config)
    }
}
