//! Route definitions for member administration.
//!
//! ```text
//! GET    /            -> list_members                admin
//! POST   /            -> create_member               admin
//! PUT    /{id}        -> update_member               admin
//! DELETE /{id}        -> delete_member               admin
//! PUT    /{id}/role   -> set_role                    admin
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::members;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(members::list_members).post(members::create_member))
        .route(
            "/{id}",
            put(members::update_member).delete(members::delete_member),
        )
        .route("/{id}/role", put(members::set_role))
}
