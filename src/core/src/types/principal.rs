//! Principal types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type name given to the authenticated user principal
pub const USER_PRINCIPAL_TYPE: &str = "user";

/// Type name given to role principals built from assertion claims
pub const ROLE_PRINCIPAL_TYPE: &str = "role";

fn default_principal_type() -> String {
    USER_PRINCIPAL_TYPE.to_string()
}

/// Principal (user, role, group marker, ...)
///
/// A principal is identified by its name and its declared type name. Two
/// principals are equal only when both agree, so a user `alice` and a role
/// `alice` are different principals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal {
    /// Principal name (e.g., "alice", "ROLE_ADMIN")
    pub name: String,

    /// Declared category of the principal (e.g., "user", "role", "ADMIN")
    #[serde(rename = "type", default = "default_principal_type")]
    pub type_name: String,
}

impl Principal {
    /// Create a principal with an explicit type name
    pub fn typed(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a user principal
    pub fn user(name: impl Into<String>) -> Self {
        Self::typed(name, USER_PRINCIPAL_TYPE)
    }

    /// Create a role principal
    pub fn role(name: impl Into<String>) -> Self {
        Self::typed(name, ROLE_PRINCIPAL_TYPE)
    }

    /// Principal name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_name, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_constructors() {
        let user = Principal::user("alice");
        assert_eq!(user.name(), "alice");
        assert_eq!(user.type_name(), USER_PRINCIPAL_TYPE);

        let role = Principal::role("admin");
        assert_eq!(role.type_name(), ROLE_PRINCIPAL_TYPE);

        let typed = Principal::typed("p1", "ADMIN");
        assert_eq!(typed.type_name(), "ADMIN");
    }

    #[test]
    fn test_equality_includes_type() {
        assert_eq!(Principal::user("alice"), Principal::user("alice"));
        assert_ne!(Principal::user("alice"), Principal::role("alice"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Principal::role("auditor").to_string(), "role:auditor");
    }

    #[test]
    fn test_deserialize_defaults_to_user() {
        let principal: Principal = serde_json::from_str(r#"{"name":"bob"}"#).unwrap();
        assert_eq!(principal, Principal::user("bob"));

        let principal: Principal =
            serde_json::from_str(r#"{"name":"P1","type":"ADMIN"}"#).unwrap();
        assert_eq!(principal, Principal::typed("P1", "ADMIN"));
    }
}
