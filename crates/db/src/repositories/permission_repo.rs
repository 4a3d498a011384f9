//! Repository for the `permissions` table.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::permission::Permission;

const COLUMNS: &str = "id, member_id, role, created_at";

/// Provides role-grant lookups and assignment.
pub struct PermissionRepo;

impl PermissionRepo {
    /// Resolve the role granted to a member, if any.
    pub async fn role_for_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT role FROM permissions WHERE member_id = $1")
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    /// Grant or replace a member's role (one grant per member).
    pub async fn set_role(
        pool: &PgPool,
        member_id: DbId,
        role: &str,
    ) -> Result<Permission, sqlx::Error> {
        let query = format!(
            "INSERT INTO permissions (member_id, role)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_permissions_member
             DO UPDATE SET role = EXCLUDED.role
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Permission>(&query)
            .bind(member_id)
            .bind(role)
            .fetch_one(pool)
            .await
    }
}
