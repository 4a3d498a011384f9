//! Admin handlers for customer requests and their internal notes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lindholm_core::error::CoreError;
use lindholm_core::types::DbId;
use lindholm_db::models::request::{KIND_APPLICATION, KIND_CONTACT};
use lindholm_db::models::request_note::CreateRequestNote;
use lindholm_db::repositories::{RequestNoteRepo, RequestRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::PageParams;
use crate::response::{DataResponse, Paged};
use crate::state::AppState;

/// Query parameters for the request listing.
#[derive(Debug, Deserialize)]
pub struct RequestListParams {
    /// Optional `contact` / `application` filter.
    pub kind: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Request body for `PATCH /requests/{id}/handled`.
#[derive(Debug, Deserialize)]
pub struct SetHandledRequest {
    pub handled: bool,
}

/// GET /requests?kind=&page=&limit=
pub async fn list_requests(
    _auth: RequireEditor,
    State(state): State<AppState>,
    Query(params): Query<RequestListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(kind) = params.kind.as_deref() {
        if kind != KIND_CONTACT && kind != KIND_APPLICATION {
            return Err(AppError::BadRequest(format!(
                "Unknown request kind '{kind}'"
            )));
        }
    }

    let (page, limit, offset) = PageParams {
        page: params.page,
        limit: params.limit,
    }
    .resolve();

    let kind = params.kind.as_deref();
    let data = RequestRepo::list(&state.pool, kind, limit, offset).await?;
    let total = RequestRepo::count(&state.pool, kind).await?;

    Ok(Json(Paged {
        data,
        total,
        page,
        limit,
    }))
}

/// PATCH /requests/{id}/handled
pub async fn set_handled(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetHandledRequest>,
) -> AppResult<impl IntoResponse> {
    let request = RequestRepo::set_handled(&state.pool, id, input.handled)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "CustomerRequest",
                id,
            })
        })?;

    tracing::info!(
        member_id = member.member_id,
        request_id = id,
        handled = input.handled,
        "Request handled flag updated"
    );

    Ok(Json(DataResponse { data: request }))
}

/// DELETE /requests/{id}
pub async fn delete_request(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RequestRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CustomerRequest",
            id,
        }));
    }

    tracing::info!(member_id = member.member_id, request_id = id, "Request deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Note handlers
// ---------------------------------------------------------------------------

/// GET /requests/{id}/notes
pub async fn list_notes(
    _auth: RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // 404 on an unknown request rather than an empty list.
    RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "CustomerRequest",
                id,
            })
        })?;

    let notes = RequestNoteRepo::list_by_request(&state.pool, id).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// POST /requests/{id}/notes
pub async fn create_note(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateRequestNote>,
) -> AppResult<impl IntoResponse> {
    if input.body.trim().is_empty() {
        return Err(AppError::BadRequest("Note body is required".into()));
    }

    RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "CustomerRequest",
                id,
            })
        })?;

    let note = RequestNoteRepo::create(&state.pool, id, member.member_id, &input.body).await?;

    tracing::info!(
        member_id = member.member_id,
        request_id = id,
        note_id = note.id,
        "Request note created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// DELETE /requests/notes/{id}
pub async fn delete_note(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RequestNoteRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "RequestNote",
            id,
        }));
    }

    tracing::info!(member_id = member.member_id, note_id = id, "Request note deleted");

    Ok(StatusCode::NO_CONTENT)
}
