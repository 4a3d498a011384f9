//! Bilingual news post model.

use lindholm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `news_posts` table.
///
/// Exactly one of the two language variants is the author's original text
/// (the one matching `source_lang`); the other is always a machine
/// translation and is never hand-edited.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NewsPost {
    pub id: DbId,
    pub title_da: String,
    pub title_en: String,
    pub body_da: String,
    pub body_en: String,
    /// `"da"` or `"en"`; the language the admin actually typed in.
    pub source_lang: String,
    pub author_id: DbId,
    /// URL of the social feed post announcing this item, when published.
    pub feed_post_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fully translated field set for inserting a news post. Built by the
/// content workflow, never directly from client input.
#[derive(Debug)]
pub struct CreateNewsPost {
    pub title_da: String,
    pub title_en: String,
    pub body_da: String,
    pub body_en: String,
    pub source_lang: String,
    pub author_id: DbId,
}

/// Replacement field set for re-submitting a news post. All four language
/// fields are always recomputed, so there are no optional members here.
#[derive(Debug)]
pub struct ReplaceNewsPost {
    pub title_da: String,
    pub title_en: String,
    pub body_da: String,
    pub body_en: String,
    pub source_lang: String,
}
