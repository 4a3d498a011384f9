//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthMember`] and rejects requests whose role
//! does not meet the minimum requirement.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lindholm_core::error::CoreError;
use lindholm_core::roles::{ROLE_ADMIN, ROLE_EDITOR};

use super::auth::AuthMember;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
pub struct RequireAdmin(pub AuthMember);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let member = AuthMember::from_request_parts(parts, state).await?;
        if member.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(member))
    }
}

/// Requires `editor` or `admin` role. Rejects with 403 Forbidden
/// otherwise. Content management routes use this.
pub struct RequireEditor(pub AuthMember);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let member = AuthMember::from_request_parts(parts, state).await?;
        if member.role != ROLE_ADMIN && member.role != ROLE_EDITOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Editor or Admin role required".into(),
            )));
        }
        Ok(RequireEditor(member))
    }
}
