//! Subject-based role extraction

use crate::classifier::RoleClassifier;
use crate::role_set::RoleSet;
use rolegate_core::{Principal, Subject};

/// Extracts roles from the principals of a login subject
pub trait SubjectRoleExtractor: Send + Sync {
    /// Select the role principals of `subject` held by `identity`
    fn extract(&self, identity: &Principal, subject: &Subject) -> RoleSet;
}

/// Zero-configuration extractor: every subject principal other than the
/// identity is a role.
///
/// Any non-role principal a login module attaches besides the identity
/// (group markers, credentials wrapped as principals) is reported as a role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityExclusion;

impl SubjectRoleExtractor for IdentityExclusion {
    fn extract(&self, identity: &Principal, subject: &Subject) -> RoleSet {
        subject
            .principals()
            .iter()
            .filter(|p| *p != identity)
            .cloned()
            .collect()
    }
}

impl SubjectRoleExtractor for RoleClassifier {
    fn extract(&self, _identity: &Principal, subject: &Subject) -> RoleSet {
        subject
            .principals()
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}
