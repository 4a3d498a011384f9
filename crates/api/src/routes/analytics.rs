//! Route definitions for the analytics proxy.
//!
//! ```text
//! GET /summary -> summary                            editor
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(analytics::summary))
}
