//! Repository for the `requests` table.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::request::{CreateCustomerRequest, CustomerRequest};

const COLUMNS: &str =
    "id, kind, name, email, phone, message, position, lang, handled, created_at";

/// Provides operations for customer requests (contact + applications).
pub struct RequestRepo;

impl RequestRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCustomerRequest,
    ) -> Result<CustomerRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (kind, name, email, phone, message, position, lang)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerRequest>(&query)
            .bind(&input.kind)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(&input.position)
            .bind(&input.lang)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomerRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = $1");
        sqlx::query_as::<_, CustomerRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests, newest first, optionally filtered by kind.
    pub async fn list(
        pool: &PgPool,
        kind: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CustomerRequest>, sqlx::Error> {
        if let Some(kind) = kind {
            let query = format!(
                "SELECT {COLUMNS} FROM requests
                 WHERE kind = $1
                 ORDER BY created_at DESC
                 LIMIT $2 OFFSET $3"
            );
            sqlx::query_as::<_, CustomerRequest>(&query)
                .bind(kind)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM requests
                 ORDER BY created_at DESC
                 LIMIT $1 OFFSET $2"
            );
            sqlx::query_as::<_, CustomerRequest>(&query)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await
        }
    }

    /// Total count matching the same filter as [`list`](Self::list).
    pub async fn count(pool: &PgPool, kind: Option<&str>) -> Result<i64, sqlx::Error> {
        if let Some(kind) = kind {
            sqlx::query_scalar("SELECT COUNT(*) FROM requests WHERE kind = $1")
                .bind(kind)
                .fetch_one(pool)
                .await
        } else {
            sqlx::query_scalar("SELECT COUNT(*) FROM requests")
                .fetch_one(pool)
                .await
        }
    }

    /// Mark a request handled or unhandled.
    pub async fn set_handled(
        pool: &PgPool,
        id: DbId,
        handled: bool,
    ) -> Result<Option<CustomerRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE requests SET handled = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerRequest>(&query)
            .bind(id)
            .bind(handled)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
