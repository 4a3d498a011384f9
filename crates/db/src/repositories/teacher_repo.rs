//! Repository for the `teachers` table.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::teacher::{CreateTeacher, Teacher, UpdateTeacher};

const COLUMNS: &str =
    "id, name, role_title, bio, photo_key, sort_order, created_at, updated_at";

/// Provides CRUD operations for driving instructors.
pub struct TeacherRepo;

impl TeacherRepo {
    pub async fn create(pool: &PgPool, input: &CreateTeacher) -> Result<Teacher, sqlx::Error> {
        let sort_order = input.sort_order.unwrap_or(0);
        let query = format!(
            "INSERT INTO teachers (name, role_title, bio, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(&input.name)
            .bind(&input.role_title)
            .bind(&input.bio)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE id = $1");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all teachers in display order (sort_order, then name).
    pub async fn list(pool: &PgPool) -> Result<Vec<Teacher>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teachers
             ORDER BY sort_order ASC, name ASC"
        );
        sqlx::query_as::<_, Teacher>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeacher,
    ) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!(
            "UPDATE teachers SET
                name = COALESCE($2, name),
                role_title = COALESCE($3, role_title),
                bio = COALESCE($4, bio),
                sort_order = COALESCE($5, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role_title)
            .bind(&input.bio)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Point a teacher at a newly stored portrait, returning the previous
    /// key so the caller can remove the replaced object.
    pub async fn set_photo_key(
        pool: &PgPool,
        id: DbId,
        photo_key: &str,
    ) -> Result<Option<(Teacher, Option<String>)>, sqlx::Error> {
        let previous: Option<Option<String>> =
            sqlx::query_scalar("SELECT photo_key FROM teachers WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        let Some(previous) = previous else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE teachers SET photo_key = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .bind(photo_key)
            .fetch_one(pool)
            .await?;
        Ok(Some((updated, previous)))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
