//! Staff member (admin dashboard account) model.

use lindholm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `members` table.
///
/// The password hash never leaves the server; serialization skips it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Member {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a member. The password is already hashed by the
/// auth layer when this reaches the repository.
#[derive(Debug)]
pub struct CreateMember {
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
}

/// DTO for updating a member.
#[derive(Debug, Deserialize)]
pub struct UpdateMember {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub is_active: Option<bool>,
}
