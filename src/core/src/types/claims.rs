//! Claims extracted from assertion attribute statements

use super::assertion::Attribute;
use crate::error::Result;
use crate::traits::AttributeSource;
use serde::{Deserialize, Serialize};

/// A (type, values) fact taken from one assertion attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type (the attribute name)
    pub claim_type: String,

    /// Name format of the source attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_format: Option<String>,

    /// Claim values
    #[serde(default)]
    pub values: Vec<String>,
}

impl Claim {
    /// Create a claim without a name format
    pub fn new<I, S>(claim_type: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            claim_type: claim_type.into(),
            name_format: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&Attribute> for Claim {
    fn from(attribute: &Attribute) -> Self {
        Self {
            claim_type: attribute.name.clone(),
            name_format: attribute.name_format.clone(),
            values: attribute.values.clone(),
        }
    }
}

/// Ordered collection of claims
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimCollection {
    claims: Vec<Claim>,
}

impl ClaimCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the claims of an assertion: one claim per attribute of every
    /// attribute statement, in document order.
    ///
    /// # Errors
    ///
    /// Returns the source's read error unchanged.
    pub fn from_source(source: &dyn AttributeSource) -> Result<Self> {
        let statements = source.attribute_statements()?;
        Ok(statements
            .iter()
            .flat_map(|statement| statement.attributes.iter())
            .map(Claim::from)
            .collect())
    }

    pub fn push(&mut self, claim: Claim) {
        self.claims.push(claim);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Claim> {
        self.claims.iter()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// All claims of the given type
    pub fn find<'a>(&'a self, claim_type: &'a str) -> impl Iterator<Item = &'a Claim> + 'a {
        self.claims.iter().filter(move |c| c.claim_type == claim_type)
    }
}

impl FromIterator<Claim> for ClaimCollection {
    fn from_iter<I: IntoIterator<Item = Claim>>(iter: I) -> Self {
        Self {
            claims: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ClaimCollection {
    type Item = &'a Claim;
    type IntoIter = std::slice::Iter<'a, Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.iter()
    }
}
