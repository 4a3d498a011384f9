//! Public submission handlers: contact form and job applications.
//!
//! Validation failures are rejected before anything touches the network.
//! The stored request row is the success criterion; both notification
//! emails are best-effort and never fail the caller.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lindholm_core::lang::Lang;
use lindholm_core::types::DbId;
use lindholm_db::models::request::{
    CreateCustomerRequest, KIND_APPLICATION, KIND_CONTACT,
};
use lindholm_db::repositories::RequestRepo;
use lindholm_mail::{Submission, SubmissionKind};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /contact`.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(max = 40, message = "Phone number is too long"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 4000, message = "Message is required"))]
    pub message: String,
    /// `"da"` (default) or `"en"`; picks the acknowledgment language.
    pub lang: Option<String>,
}

/// Request body for `POST /applications`.
#[derive(Debug, Deserialize, Validate)]
pub struct ApplicationForm {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(max = 40, message = "Phone number is too long"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 4000, message = "Message is required"))]
    pub message: String,
    #[validate(length(min = 1, max = 200, message = "Position is required"))]
    pub position: String,
    pub lang: Option<String>,
}

/// Response body: the stored request id.
#[derive(Debug, Serialize)]
pub struct SubmittedResponse {
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactForm>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let lang = parse_lang(input.lang.as_deref())?;

    let request = RequestRepo::create(
        &state.pool,
        &CreateCustomerRequest {
            kind: KIND_CONTACT.to_string(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            message: input.message.clone(),
            position: None,
            lang: lang.as_str().to_string(),
        },
    )
    .await?;

    tracing::info!(request_id = request.id, "Contact request stored");

    send_submission_mails(
        &state,
        Submission {
            kind: SubmissionKind::Contact,
            name: &input.name,
            email: &input.email,
            phone: input.phone.as_deref(),
            message: &input.message,
            position: None,
        },
        lang,
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmittedResponse { id: request.id },
        }),
    ))
}

/// POST /applications
pub async fn submit_application(
    State(state): State<AppState>,
    Json(input): Json<ApplicationForm>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let lang = parse_lang(input.lang.as_deref())?;

    let request = RequestRepo::create(
        &state.pool,
        &CreateCustomerRequest {
            kind: KIND_APPLICATION.to_string(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            message: input.message.clone(),
            position: Some(input.position.clone()),
            lang: lang.as_str().to_string(),
        },
    )
    .await?;

    tracing::info!(request_id = request.id, "Job application stored");

    send_submission_mails(
        &state,
        Submission {
            kind: SubmissionKind::Application,
            name: &input.name,
            email: &input.email,
            phone: input.phone.as_deref(),
            message: &input.message,
            position: Some(&input.position),
        },
        lang,
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmittedResponse { id: request.id },
        }),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_lang(lang: Option<&str>) -> Result<Lang, AppError> {
    match lang {
        None => Ok(Lang::Da),
        Some(value) => Lang::from_column(value)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown language '{value}'"))),
    }
}

/// Fire both submission emails, logging failures instead of surfacing
/// them.
async fn send_submission_mails(state: &AppState, submission: Submission<'_>, lang: Lang) {
    let Some(mailer) = state.mailer.as_ref() else {
        tracing::warn!("SMTP not configured; submission emails skipped");
        return;
    };

    if let Err(err) = mailer.notify_admin(&submission).await {
        tracing::warn!(error = %err, "Admin notification email failed");
    }
    if let Err(err) = mailer.acknowledge(&submission, lang).await {
        tracing::warn!(error = %err, "Acknowledgment email failed");
    }
}
