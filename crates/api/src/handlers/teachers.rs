//! Handlers for the `/teachers` resource, including portrait upload.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lindholm_core::error::CoreError;
use lindholm_core::media::{normalize_image, NORMALIZED_CONTENT_TYPE, PORTRAIT_PX};
use lindholm_core::types::DbId;
use lindholm_db::models::teacher::{CreateTeacher, Teacher, UpdateTeacher};
use lindholm_db::repositories::TeacherRepo;
use lindholm_storage::StorageError;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// A teacher with the portrait URL derived from its storage key.
#[derive(Debug, Serialize)]
pub struct TeacherResponse {
    #[serde(flatten)]
    pub teacher: Teacher,
    pub photo_url: Option<String>,
}

fn with_photo_url(state: &AppState, teacher: Teacher) -> TeacherResponse {
    let photo_url = teacher
        .photo_key
        .as_deref()
        .map(|key| state.store.public_url(key));
    TeacherResponse { teacher, photo_url }
}

/// GET /teachers
///
/// Public list in display order.
pub async fn list_teachers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let teachers = TeacherRepo::list(&state.pool).await?;
    let data: Vec<_> = teachers
        .into_iter()
        .map(|t| with_photo_url(&state, t))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// POST /teachers
pub async fn create_teacher(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateTeacher>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Teacher name is required".into()));
    }

    let teacher = TeacherRepo::create(&state.pool, &input).await?;

    tracing::info!(
        member_id = member.member_id,
        teacher_id = teacher.id,
        "Teacher created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: with_photo_url(&state, teacher),
        }),
    ))
}

/// PUT /teachers/{id}
pub async fn update_teacher(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeacher>,
) -> AppResult<impl IntoResponse> {
    let teacher = TeacherRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Teacher",
                id,
            })
        })?;

    tracing::info!(member_id = member.member_id, teacher_id = id, "Teacher updated");

    Ok(Json(DataResponse {
        data: with_photo_url(&state, teacher),
    }))
}

/// POST /teachers/{id}/photo  (multipart, one `photo` part)
///
/// Normalize the uploaded portrait to a fixed square JPEG, store it, and
/// point the teacher row at it. A replaced portrait's object is removed
/// best-effort.
pub async fn upload_photo(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut photo: Option<Vec<u8>> = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("photo") => photo = Some(field.bytes().await?.to_vec()),
            other => {
                return Err(AppError::BadRequest(format!(
                    "Unexpected form field '{}'",
                    other.unwrap_or("<unnamed>")
                )));
            }
        }
    }
    let photo = photo.ok_or_else(|| AppError::BadRequest("A 'photo' part is required".into()))?;

    let jpeg = normalize_image(&photo, PORTRAIT_PX)
        .map_err(|e| AppError::BadRequest(format!("Unsupported image: {e}")))?;

    let key = format!("teachers/{id}/{}.jpg", uuid::Uuid::new_v4());
    state
        .store
        .put(&key, jpeg, NORMALIZED_CONTENT_TYPE)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    let (teacher, previous_key) = TeacherRepo::set_photo_key(&state.pool, id, &key)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Teacher",
                id,
            })
        })?;

    if let Some(previous) = previous_key {
        match state.store.delete(&previous).await {
            Ok(()) | Err(StorageError::NotFound(_)) => {}
            Err(err) => {
                tracing::warn!(teacher_id = id, key = %previous, error = %err,
                    "Replaced portrait not removed");
            }
        }
    }

    tracing::info!(
        member_id = member.member_id,
        teacher_id = id,
        "Teacher portrait updated"
    );

    Ok(Json(DataResponse {
        data: with_photo_url(&state, teacher),
    }))
}

/// DELETE /teachers/{id}
pub async fn delete_teacher(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Remove the portrait object first so a storage failure is surfaced
    // while the row still exists for a retry.
    if let Some(teacher) = TeacherRepo::find_by_id(&state.pool, id).await? {
        if let Some(key) = teacher.photo_key.as_deref() {
            match state.store.delete(key).await {
                Ok(()) | Err(StorageError::NotFound(_)) => {}
                Err(err) => return Err(AppError::Storage(err.to_string())),
            }
        }
    }

    let deleted = TeacherRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }));
    }

    tracing::info!(member_id = member.member_id, teacher_id = id, "Teacher deleted");

    Ok(StatusCode::NO_CONTENT)
}
