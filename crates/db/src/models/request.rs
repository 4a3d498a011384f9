//! Customer request model (contact form and job application submissions).

use lindholm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Request kind column value for contact-form submissions.
pub const KIND_CONTACT: &str = "contact";

/// Request kind column value for job applications.
pub const KIND_APPLICATION: &str = "application";

/// A row from the `requests` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerRequest {
    pub id: DbId,
    /// `"contact"` or `"application"`.
    pub kind: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Position applied for; only set for job applications.
    pub position: Option<String>,
    /// Language of the submission, used for the acknowledgment email.
    pub lang: String,
    pub handled: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a customer request. Built by the public submission
/// handlers after validation.
#[derive(Debug)]
pub struct CreateCustomerRequest {
    pub kind: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub position: Option<String>,
    pub lang: String,
}
