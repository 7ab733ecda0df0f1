//! Authenticated subject produced by a prior login step

use super::principal::Principal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Platform-level grouping of the authenticated principal and any role
/// principals attached by the login module.
///
/// Principals keep their insertion order; duplicates are ignored, including
/// when the subject is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SubjectRepr", into = "SubjectRepr")]
pub struct Subject {
    principals: Vec<Principal>,
    index: HashSet<Principal>,
}

/// Wire form of [`Subject`]
#[derive(Serialize, Deserialize)]
struct SubjectRepr {
    #[serde(default)]
    principals: Vec<Principal>,
}

impl From<SubjectRepr> for Subject {
    fn from(repr: SubjectRepr) -> Self {
        repr.principals.into_iter().collect()
    }
}

impl From<Subject> for SubjectRepr {
    fn from(subject: Subject) -> Self {
        SubjectRepr {
            principals: subject.principals,
        }
    }
}

impl Subject {
    /// Create an empty subject
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a principal to the subject
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.insert(principal);
        self
    }

    /// Insert a principal, returning false if it was already present
    pub fn insert(&mut self, principal: Principal) -> bool {
        if !self.index.insert(principal.clone()) {
            return false;
        }
        self.principals.push(principal);
        true
    }

    /// All principals in insertion order
    pub fn principals(&self) -> &[Principal] {
        &self.principals
    }

    pub fn len(&self) -> usize {
        self.principals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

impl FromIterator<Principal> for Subject {
    fn from_iter<I: IntoIterator<Item = Principal>>(iter: I) -> Self {
        let mut subject = Subject::new();
        for principal in iter {
            subject.insert(principal);
        }
        subject
    }
}
