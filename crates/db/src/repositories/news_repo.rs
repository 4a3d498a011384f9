//! Repository for the `news_posts` table.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::news::{CreateNewsPost, NewsPost, ReplaceNewsPost};

/// Column list for news_posts queries.
const COLUMNS: &str = "id, title_da, title_en, body_da, body_en, source_lang, \
    author_id, feed_post_url, created_at, updated_at";

/// Provides CRUD operations for news posts.
pub struct NewsRepo;

impl NewsRepo {
    /// Insert a fully translated news post, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNewsPost) -> Result<NewsPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO news_posts
                (title_da, title_en, body_da, body_en, source_lang, author_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsPost>(&query)
            .bind(&input.title_da)
            .bind(&input.title_en)
            .bind(&input.body_da)
            .bind(&input.body_en)
            .bind(&input.source_lang)
            .bind(input.author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a news post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NewsPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news_posts WHERE id = $1");
        sqlx::query_as::<_, NewsPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List posts, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NewsPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news_posts
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, NewsPost>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of posts, for stable pagination.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM news_posts")
            .fetch_one(pool)
            .await
    }

    /// Replace all language fields of a post. The content workflow always
    /// recomputes the full bilingual set, so there is no partial update.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ReplaceNewsPost,
    ) -> Result<Option<NewsPost>, sqlx::Error> {
        let query = format!(
            "UPDATE news_posts SET
                title_da = $2, title_en = $3, body_da = $4, body_en = $5,
                source_lang = $6, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsPost>(&query)
            .bind(id)
            .bind(&input.title_da)
            .bind(&input.title_en)
            .bind(&input.body_da)
            .bind(&input.body_en)
            .bind(&input.source_lang)
            .fetch_optional(pool)
            .await
    }

    /// Record the social feed post URL after a successful publish.
    pub async fn set_feed_post_url(
        pool: &PgPool,
        id: DbId,
        url: &str,
    ) -> Result<Option<NewsPost>, sqlx::Error> {
        let query = format!(
            "UPDATE news_posts SET feed_post_url = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsPost>(&query)
            .bind(id)
            .bind(url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a news post by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
