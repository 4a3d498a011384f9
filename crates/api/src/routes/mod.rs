//! Route tree for the API server.

use axum::Router;

use crate::state::AppState;

pub mod analytics;
pub mod auth;
pub mod contact;
pub mod courses;
pub mod health;
pub mod members;
pub mod news;
pub mod packages;
pub mod requests;
pub mod reviews;
pub mod teachers;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login, refresh, logout, me).
        .nest("/auth", auth::router())
        // Bilingual news posts (public read, editor write).
        .nest("/news", news::router())
        // Student reviews (public read of published, editor write).
        .nest("/reviews", reviews::router())
        // Instructor bios and portraits.
        .nest("/teachers", teachers::router())
        // Lesson packages and feature bullets.
        .nest("/packages", packages::router())
        .nest("/features", packages::features_router())
        // Customer requests + internal notes (admin surface).
        .nest("/requests", requests::router())
        // Member administration (admin only).
        .nest("/members", members::router())
        // Public form submissions.
        .merge(contact::router())
        // Course listing proxied from the booking widget.
        .nest("/courses", courses::router())
        // Analytics summary proxy.
        .nest("/analytics", analytics::router())
}
