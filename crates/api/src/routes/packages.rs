//! Route definitions for packages and features.
//!
//! ```text
//! GET    /               -> list_packages            public
//! POST   /               -> create_package           editor
//! PUT    /{id}           -> update_package           editor
//! DELETE /{id}           -> delete_package           editor
//! PUT    /{id}/features  -> set_features             editor
//! ```
//!
//! Feature lookup list (mounted at `/features`):
//!
//! ```text
//! GET    /        -> list_features                   editor
//! POST   /        -> create_feature                  editor
//! DELETE /{id}    -> delete_feature                  editor
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::packages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(packages::list_packages).post(packages::create_package),
        )
        .route(
            "/{id}",
            put(packages::update_package).delete(packages::delete_package),
        )
        .route("/{id}/features", put(packages::set_features))
}

pub fn features_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(packages::list_features).post(packages::create_feature),
        )
        .route("/{id}", axum::routing::delete(packages::delete_feature))
}
