//! User role.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
///
/// The role is issued by the backend as part of the authentication
/// response. It gates access to the admin controllers only; the server
/// remains the authority for every admin operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular user: quizzes, missions, tips, personal stats.
    #[default]
    User,
    /// Administrator: user and content management.
    Admin,
}

impl Role {
    /// Returns the role as a lowercase string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Returns `true` for the admin role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_user() {
        assert_eq!(Role::default(), Role::User);
        assert!(!Role::default().is_admin());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::Admin).expect("serialize"),
            "\"admin\""
        );
        let role: Role = serde_json::from_str("\"user\"").expect("deserialize");
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::User.to_string(), "user");
    }
}
