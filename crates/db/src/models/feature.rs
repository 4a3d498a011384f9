//! Reusable package feature ("feature bullet") model.

use lindholm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `features` table. Features are shared bullets assigned
/// to packages through `package_features`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Feature {
    pub id: DbId,
    pub label: String,
    pub created_at: Timestamp,
}

/// DTO for creating a feature.
#[derive(Debug, Deserialize)]
pub struct CreateFeature {
    pub label: String,
}
