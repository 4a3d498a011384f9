//! Repository for the `request_notes` table.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::request_note::RequestNote;

const COLUMNS: &str = "id, request_id, author_id, body, created_at";

pub struct RequestNoteRepo;

impl RequestNoteRepo {
    pub async fn create(
        pool: &PgPool,
        request_id: DbId,
        author_id: DbId,
        body: &str,
    ) -> Result<RequestNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO request_notes (request_id, author_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RequestNote>(&query)
            .bind(request_id)
            .bind(author_id)
            .bind(body)
            .fetch_one(pool)
            .await
    }

    /// Notes on a request, oldest first.
    pub async fn list_by_request(
        pool: &PgPool,
        request_id: DbId,
    ) -> Result<Vec<RequestNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM request_notes
             WHERE request_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, RequestNote>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM request_notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
