//! Route definitions for customer requests and notes.
//!
//! ```text
//! GET    /               -> list_requests (?kind, page, limit)  editor
//! PATCH  /{id}/handled   -> set_handled                         editor
//! DELETE /{id}           -> delete_request                      editor
//! GET    /{id}/notes     -> list_notes                          editor
//! POST   /{id}/notes     -> create_note                         editor
//! DELETE /notes/{id}     -> delete_note                         editor
//! ```

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(requests::list_requests))
        .route("/{id}", delete(requests::delete_request))
        .route("/{id}/handled", patch(requests::set_handled))
        .route(
            "/{id}/notes",
            get(requests::list_notes).post(requests::create_note),
        )
        .route("/notes/{id}", delete(requests::delete_note))
}
