//! Stored image owned by a news post.

use lindholm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `news_images` table. Each image is exclusively owned by
/// one news post and is removed together with it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NewsImage {
    pub id: DbId,
    pub news_id: DbId,
    /// Object-store key of the normalized JPEG.
    pub storage_key: String,
    /// Display position within the post, taken from the upload position.
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for inserting a news image row.
#[derive(Debug)]
pub struct CreateNewsImage {
    pub news_id: DbId,
    pub storage_key: String,
    pub sort_order: i32,
}
