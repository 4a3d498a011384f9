//! Role grant model.

use lindholm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `permissions` table. One grant per member; the role
/// value is validated against `lindholm_core::roles` before it gets here.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Permission {
    pub id: DbId,
    pub member_id: DbId,
    pub role: String,
    pub created_at: Timestamp,
}
