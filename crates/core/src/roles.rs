//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000001_create_members.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

/// All roles a member can be granted.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR];

/// Validate that `role` names a known role.
pub fn validate_role(role: &str) -> Result<(), String> {
    if ALL_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!("Unknown role '{role}'. Must be one of: {ALL_ROLES:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_pass() {
        assert!(validate_role(ROLE_ADMIN).is_ok());
        assert!(validate_role(ROLE_EDITOR).is_ok());
    }

    #[test]
    fn unknown_role_rejected() {
        let err = validate_role("superuser").unwrap_err();
        assert!(err.contains("superuser"));
    }
}
