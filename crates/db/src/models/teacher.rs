//! Driving instructor model.

use lindholm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `teachers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Teacher {
    pub id: DbId,
    pub name: String,
    /// Displayed role, e.g. "Kørelærer" or "Indehaver".
    pub role_title: String,
    pub bio: String,
    /// Object-store key of the normalized portrait, if one was uploaded.
    pub photo_key: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a teacher.
#[derive(Debug, Deserialize)]
pub struct CreateTeacher {
    pub name: String,
    pub role_title: String,
    pub bio: String,
    pub sort_order: Option<i32>,
}

/// DTO for updating a teacher.
#[derive(Debug, Deserialize)]
pub struct UpdateTeacher {
    pub name: Option<String>,
    pub role_title: Option<String>,
    pub bio: Option<String>,
    pub sort_order: Option<i32>,
}
