//! Route definitions for public form submissions.
//!
//! ```text
//! POST /contact       -> submit_contact              public
//! POST /applications  -> submit_application          public
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit_contact))
        .route("/applications", post(contact::submit_application))
}
