//! Parsed assertion model
//!
//! The assertion arrives here after the token layer has verified its
//! signature and trust chain. Only the parts relevant to role extraction are
//! modelled: the issuer, the SAML version, and the attribute statements.

use crate::error::{AssertionReadError, Result};
use crate::traits::AttributeSource;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// SAML token version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamlVersion {
    #[serde(rename = "1.1")]
    V1_1,
    #[default]
    #[serde(rename = "2.0")]
    V2_0,
}

impl fmt::Display for SamlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamlVersion::V1_1 => write!(f, "1.1"),
            SamlVersion::V2_0 => write!(f, "2.0"),
        }
    }
}

/// Single named attribute with its string values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name (usually a claim URI)
    pub name: String,

    /// Optional name format URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_format: Option<String>,

    /// Optional friendly name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// Attribute values
    #[serde(default)]
    pub values: Vec<String>,
}

impl Attribute {
    /// Create an attribute with the given values
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            name_format: None,
            friendly_name: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the name format
    pub fn with_name_format(mut self, name_format: impl Into<String>) -> Self {
        self.name_format = Some(name_format.into());
        self
    }

    /// Set the friendly name
    pub fn with_friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }
}

/// Group of attributes asserted together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeStatement {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl AttributeStatement {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }
}

/// Validated assertion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// Assertion identifier
    #[serde(default)]
    pub id: String,

    /// Issuer of the assertion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Token version
    #[serde(default)]
    pub version: SamlVersion,

    /// Attribute statements in document order
    #[serde(default)]
    pub attribute_statements: Vec<AttributeStatement>,
}

impl Assertion {
    /// Create an empty SAML 2.0 assertion
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the issuer
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the token version
    pub fn with_version(mut self, version: SamlVersion) -> Self {
        self.version = version;
        self
    }

    /// Append an attribute statement
    pub fn with_statement(mut self, statement: AttributeStatement) -> Self {
        self.attribute_statements.push(statement);
        self
    }

    /// Append a statement holding a single attribute
    pub fn with_attribute(self, attribute: Attribute) -> Self {
        self.with_statement(AttributeStatement::new(vec![attribute]))
    }

    fn validate_statements(&self) -> Result<()> {
        for (idx, statement) in self.attribute_statements.iter().enumerate() {
            for attribute in &statement.attributes {
                if attribute.name.trim().is_empty() {
                    return Err(AssertionReadError::malformed(
                        idx,
                        "attribute name is empty",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl AttributeSource for Assertion {
    fn attribute_statements(&self) -> Result<Cow<'_, [AttributeStatement]>> {
        self.validate_statements()?;
        Ok(Cow::Borrowed(&self.attribute_statements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_builder() {
        let assertion = Assertion::new("_a1")
            .with_issuer("https://idp.example.com")
            .with_attribute(Attribute::new("email", ["alice@example.com"]))
            .with_statement(AttributeStatement::new(vec![
                Attribute::new("role", ["admin", "auditor"]),
                Attribute::new("dept", ["eng"]),
            ]));

        assert_eq!(assertion.version, SamlVersion::V2_0);
        assert_eq!(assertion.attribute_statements.len(), 2);

        let statements = assertion.attribute_statements().unwrap();
        assert_eq!(statements[1].attributes[0].values, vec!["admin", "auditor"]);
    }

    #[test]
    fn test_empty_attribute_name_is_malformed() {
        let assertion = Assertion::new("_a2")
            .with_attribute(Attribute::new("role", ["admin"]))
            .with_attribute(Attribute::new("  ", ["x"]));

        let err = assertion.attribute_statements().unwrap_err();
        assert_eq!(err, AssertionReadError::malformed(1, "attribute name is empty"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "id": "_a3",
            "version": "1.1",
            "attribute_statements": [
                { "attributes": [
                    { "name": "role", "name_format": "urn:format", "values": ["admin"] }
                ] }
            ]
        }"#;

        let assertion: Assertion = serde_json::from_str(json).unwrap();
        assert_eq!(assertion.version, SamlVersion::V1_1);
        assert_eq!(
            assertion.attribute_statements[0].attributes[0].name_format.as_deref(),
            Some("urn:format")
        );
        assert!(assertion.issuer.is_none());
    }

    #[test]
    fn test_version_and_friendly_name() {
        let assertion = Assertion::new("_a4")
            .with_version(SamlVersion::V1_1)
            .with_attribute(
                Attribute::new("urn:oid:1.3.6.1.4.1.5923.1.1.1.1", ["member"])
                    .with_friendly_name("eduPersonAffiliation"),
            );

        assert_eq!(assertion.version, SamlVersion::V1_1);
        let attribute = &assertion.attribute_statements[0].attributes[0];
        assert_eq!(attribute.friendly_name.as_deref(), Some("eduPersonAffiliation"));

        let json = serde_json::to_value(&assertion).unwrap();
        assert_eq!(json["version"], "1.1");
        assert_eq!(
            json["attribute_statements"][0]["attributes"][0]["friendly_name"],
            "eduPersonAffiliation"
        );
    }

    #[test]
    fn test_version_display() {
        assert_eq!(SamlVersion::V1_1.to_string(), "1.1");
        assert_eq!(SamlVersion::V2_0.to_string(), "2.0");
    }
}
