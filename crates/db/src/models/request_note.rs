//! Internal note attached to a customer request.

use lindholm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `request_notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RequestNote {
    pub id: DbId,
    pub request_id: DbId,
    pub author_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
}

/// DTO for creating a request note. The request id comes from the path,
/// the author from the session.
#[derive(Debug, Deserialize)]
pub struct CreateRequestNote {
    pub body: String,
}
