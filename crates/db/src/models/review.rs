//! Student review model.

use lindholm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub id: DbId,
    pub reviewer_name: String,
    pub content: String,
    /// 1–5 stars.
    pub rating: i16,
    /// Only published reviews appear on the public site.
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a review.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub reviewer_name: String,
    pub content: String,
    pub rating: i16,
    pub published: Option<bool>,
}

/// DTO for updating a review.
#[derive(Debug, Deserialize)]
pub struct UpdateReview {
    pub reviewer_name: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i16>,
    pub published: Option<bool>,
}
