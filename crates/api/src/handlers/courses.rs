//! Public course listing, proxied from the booking widget.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /courses
///
/// Serve the cached course listing. The `Cache-Control` window mirrors
/// the adapter's in-process revalidation window so browser and CDN
/// caching line up with it.
pub async fn list_courses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let courses = state
        .courses
        .courses()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let max_age = state.courses.ttl().as_secs();
    Ok((
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={max_age}"),
        )],
        Json(DataResponse { data: courses }),
    ))
}
