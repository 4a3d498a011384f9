//! Repository for the `news_images` table.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::news_image::{CreateNewsImage, NewsImage};

const COLUMNS: &str = "id, news_id, storage_key, sort_order, created_at";

/// Provides row operations for stored news images.
pub struct NewsImageRepo;

impl NewsImageRepo {
    /// Insert an image row for an existing post.
    pub async fn create(pool: &PgPool, input: &CreateNewsImage) -> Result<NewsImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO news_images (news_id, storage_key, sort_order)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsImage>(&query)
            .bind(input.news_id)
            .bind(&input.storage_key)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List images for a post in display order.
    pub async fn list_by_post(pool: &PgPool, news_id: DbId) -> Result<Vec<NewsImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news_images
             WHERE news_id = $1
             ORDER BY sort_order ASC"
        );
        sqlx::query_as::<_, NewsImage>(&query)
            .bind(news_id)
            .fetch_all(pool)
            .await
    }

    /// Delete one image row by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
