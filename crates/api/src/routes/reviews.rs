//! Route definitions for reviews.
//!
//! ```text
//! GET    /        -> list_published (?page, limit)   public
//! GET    /all     -> list_all (?page, limit)         editor
//! POST   /        -> create_review                   editor
//! PUT    /{id}    -> update_review                   editor
//! DELETE /{id}    -> delete_review                   editor
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reviews::list_published).post(reviews::create_review),
        )
        .route("/all", get(reviews::list_all))
        .route(
            "/{id}",
            axum::routing::put(reviews::update_review).delete(reviews::delete_review),
        )
}
