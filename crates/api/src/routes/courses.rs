//! Route definitions for the proxied course listing.
//!
//! ```text
//! GET / -> list_courses                              public
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(courses::list_courses))
}
