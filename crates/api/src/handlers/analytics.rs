//! Authenticated proxy for the analytics provider's summary stats.
//!
//! The dashboard shows visitor/pageview aggregates; the provider API key
//! stays server-side and the frontend only ever talks to this endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use lindholm_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /analytics/summary
pub async fn summary(
    _auth: RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let Some(analytics) = state.config.analytics.as_ref() else {
        return Err(AppError::Core(CoreError::Internal(
            "Analytics provider not configured".into(),
        )));
    };

    let response = state
        .http
        .get(format!("{}/stats/aggregate", analytics.api_url))
        .bearer_auth(&analytics.api_key)
        .query(&[
            ("site_id", analytics.site_id.as_str()),
            ("metrics", "visitors,pageviews"),
            ("period", "30d"),
        ])
        .send()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream(format!(
            "analytics API returned {status}: {body}"
        )));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(DataResponse { data: body }))
}
