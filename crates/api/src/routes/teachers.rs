//! Route definitions for teachers.
//!
//! ```text
//! GET    /            -> list_teachers               public
//! POST   /            -> create_teacher              editor
//! PUT    /{id}        -> update_teacher              editor
//! DELETE /{id}        -> delete_teacher              editor
//! POST   /{id}/photo  -> upload_photo (multipart)    editor
//! ```

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::teachers;
use crate::state::AppState;

/// One portrait upload at a time.
const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(teachers::list_teachers).post(teachers::create_teacher),
        )
        .route(
            "/{id}",
            put(teachers::update_teacher).delete(teachers::delete_teacher),
        )
        .route("/{id}/photo", post(teachers::upload_photo))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
