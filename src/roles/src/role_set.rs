//! Resolved role set

use rolegate_core::Principal;
use serde::Serialize;
use std::collections::BTreeSet;

/// Set of role principals held by a caller
///
/// An empty set means "no roles". Authorization layers must deny
/// role-gated operations for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleSet {
    roles: BTreeSet<Principal>,
}

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role, returning false if it was already present
    pub fn insert(&mut self, role: Principal) -> bool {
        self.roles.insert(role)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn contains(&self, role: &Principal) -> bool {
        self.roles.contains(role)
    }

    /// Check whether any role principal carries the given name
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name() == name)
    }

    /// Role names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.roles.iter().map(Principal::name).collect()
    }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, Principal> {
        self.roles.iter()
    }

    pub fn into_inner(self) -> BTreeSet<Principal> {
        self.roles
    }
}

impl FromIterator<Principal> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Principal>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RoleSet {
    type Item = Principal;
    type IntoIter = std::collections::btree_set::IntoIter<Principal>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.into_iter()
    }
}

impl<'a> IntoIterator for &'a RoleSet {
    type Item = &'a Principal;
    type IntoIter = std::collections::btree_set::Iter<'a, Principal>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_semantics() {
        let roles: RoleSet = vec![
            Principal::role("auditor"),
            Principal::role("admin"),
            Principal::role("admin"),
        ]
        .into_iter()
        .collect();

        assert_eq!(roles.len(), 2);
        assert_eq!(roles.names(), vec!["admin", "auditor"]);
    }

    #[test]
    fn test_has_role_ignores_type() {
        let roles: RoleSet = vec![Principal::typed("P1", "ADMIN")].into_iter().collect();

        assert!(roles.has_role("P1"));
        assert!(!roles.has_role("ADMIN"));
        assert!(roles.contains(&Principal::typed("P1", "ADMIN")));
        assert!(!roles.contains(&Principal::role("P1")));
    }

    #[test]
    fn test_empty() {
        let roles = RoleSet::new();
        assert!(roles.is_empty());
        assert!(!roles.has_role("admin"));
    }

    #[test]
    fn test_into_inner_keeps_order() {
        let roles: RoleSet = vec![Principal::role("b"), Principal::role("a")]
            .into_iter()
            .collect();

        let inner = roles.into_inner();
        let names: Vec<&str> = inner.iter().map(Principal::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_serialize_as_list() {
        let roles: RoleSet = vec![Principal::role("admin")].into_iter().collect();
        let json = serde_json::to_string(&roles).unwrap();
        assert_eq!(json, r#"[{"name":"admin","type":"role"}]"#);
    }
}
