//! Route definitions for news posts.
//!
//! ```text
//! GET    /        -> list_news (?page, limit)        public
//! POST   /        -> create_news (multipart)         editor
//! GET    /{id}    -> get_news                        public
//! PUT    /{id}    -> update_news (multipart)         editor
//! DELETE /{id}    -> delete_news                     editor
//! ```

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// Multipart ceiling: up to ten images per post plus text fields.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_news).post(news::create_news))
        .route(
            "/{id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
