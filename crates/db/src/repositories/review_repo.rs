//! Repository for the `reviews` table.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, UpdateReview};

const COLUMNS: &str = "id, reviewer_name, content, rating, published, created_at, updated_at";

/// Provides CRUD operations for student reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Create a new review, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let published = input.published.unwrap_or(false);
        let query = format!(
            "INSERT INTO reviews (reviewer_name, content, rating, published)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&input.reviewer_name)
            .bind(&input.content)
            .bind(input.rating)
            .bind(published)
            .fetch_one(pool)
            .await
    }

    /// Find a review by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published reviews, newest first. The public site only sees
    /// these.
    pub async fn list_published(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE published = TRUE
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of published reviews.
    pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE published = TRUE")
            .fetch_one(pool)
            .await
    }

    /// List all reviews for the admin dashboard, newest first.
    pub async fn list_all(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of reviews.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(pool)
            .await
    }

    /// Update a review by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET
                reviewer_name = COALESCE($2, reviewer_name),
                content = COALESCE($3, content),
                rating = COALESCE($4, rating),
                published = COALESCE($5, published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(&input.reviewer_name)
            .bind(&input.content)
            .bind(input.rating)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
