//! Handlers for the `/reviews` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lindholm_core::error::CoreError;
use lindholm_core::types::DbId;
use lindholm_db::models::review::{CreateReview, UpdateReview};
use lindholm_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::PageParams;
use crate::response::{DataResponse, Paged};
use crate::state::AppState;

/// Valid star ratings.
fn validate_rating(rating: i16) -> Result<(), AppError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Rating must be between 1 and 5, got {rating}"
        )))
    }
}

/// GET /reviews?page=&limit=
///
/// Public paginated listing of published reviews.
pub async fn list_published(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let (page, limit, offset) = params.resolve();

    let data = ReviewRepo::list_published(&state.pool, limit, offset).await?;
    let total = ReviewRepo::count_published(&state.pool).await?;

    Ok(Json(Paged {
        data,
        total,
        page,
        limit,
    }))
}

/// GET /reviews/all?page=&limit=
///
/// Admin listing including unpublished reviews.
pub async fn list_all(
    _auth: RequireEditor,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let (page, limit, offset) = params.resolve();

    let data = ReviewRepo::list_all(&state.pool, limit, offset).await?;
    let total = ReviewRepo::count_all(&state.pool).await?;

    Ok(Json(Paged {
        data,
        total,
        page,
        limit,
    }))
}

/// POST /reviews
pub async fn create_review(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    if input.reviewer_name.trim().is_empty() || input.content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Reviewer name and content are required".into(),
        ));
    }
    validate_rating(input.rating)?;

    let review = ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(
        member_id = member.member_id,
        review_id = review.id,
        "Review created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// PUT /reviews/{id}
pub async fn update_review(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<impl IntoResponse> {
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let review = ReviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Review",
                id,
            })
        })?;

    tracing::info!(member_id = member.member_id, review_id = id, "Review updated");

    Ok(Json(DataResponse { data: review }))
}

/// DELETE /reviews/{id}
pub async fn delete_review(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ReviewRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }));
    }

    tracing::info!(member_id = member.member_id, review_id = id, "Review deleted");

    Ok(StatusCode::NO_CONTENT)
}
