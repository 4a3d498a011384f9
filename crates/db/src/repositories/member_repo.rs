//! Repository for the `members` table.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{CreateMember, Member, UpdateMember};

const COLUMNS: &str =
    "id, email, display_name, password_hash, is_active, created_at, updated_at";

/// Provides CRUD operations for staff accounts.
pub struct MemberRepo;

impl MemberRepo {
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (email, display_name, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Login lookup. Emails are stored lowercased and matched the same way.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE email = LOWER($1)");
        sqlx::query_as::<_, Member>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// All members for the admin member list.
    pub async fn list(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members ORDER BY display_name ASC");
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE members SET
                email = COALESCE(LOWER($2), email),
                display_name = COALESCE($3, display_name),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
