//! Handlers for the `/auth` resource (login, refresh, logout, me).

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use lindholm_core::error::CoreError;
use lindholm_core::types::DbId;
use lindholm_db::repositories::{MemberRepo, PermissionRepo, SessionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh` and `POST /auth/logout`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub member: MemberInfo,
}

/// Public member info embedded in [`AuthResponse`] and `/auth/me`.
#[derive(Debug, Serialize)]
pub struct MemberInfo {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let member = MemberRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    if !member.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &member.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // Role comes from the permissions table; an account without a grant
    // cannot use the dashboard at all.
    let role = PermissionRepo::role_for_member(&state.pool, member.id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Forbidden("No role assigned".into())))?;

    tracing::info!(member_id = member.id, role = %role, "Member logged in");

    let response = create_auth_response(
        &state,
        member.id,
        &member.email,
        &member.display_name,
        &role,
    )
    .await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The
/// old session is revoked (rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let hash = hash_refresh_token(&input.refresh_token);
    let session = SessionRepo::find_active_by_hash(&state.pool, &hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let member = MemberRepo::find_by_id(&state.pool, session.member_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Member no longer exists".into())))?;

    if !member.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let role = PermissionRepo::role_for_member(&state.pool, member.id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Forbidden("No role assigned".into())))?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let response = create_auth_response(
        &state,
        member.id,
        &member.email,
        &member.display_name,
        &role,
    )
    .await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke the session belonging to the presented refresh token.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<axum::http::StatusCode> {
    let hash = hash_refresh_token(&input.refresh_token);
    if let Some(session) = SessionRepo::find_active_by_hash(&state.pool, &hash).await? {
        SessionRepo::revoke(&state.pool, session.id).await?;
        tracing::info!(member_id = session.member_id, "Member logged out");
    }
    // Unknown tokens succeed too; logout must be idempotent.
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// Return the signed-in member's profile and role.
pub async fn me(
    auth: AuthMember,
    State(state): State<AppState>,
) -> AppResult<Json<MemberInfo>> {
    let member = MemberRepo::find_by_id(&state.pool, auth.member_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Member no longer exists".into())))?;

    Ok(Json(MemberInfo {
        id: member.id,
        email: member.email,
        display_name: member.display_name,
        role: auth.role,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue tokens and persist the refresh session.
async fn create_auth_response(
    state: &AppState,
    member_id: DbId,
    email: &str,
    display_name: &str,
    role: &str,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(member_id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_token, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);
    SessionRepo::create(&state.pool, member_id, &refresh_hash, expires_at).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        member: MemberInfo {
            id: member_id,
            email: email.to_string(),
            display_name: display_name.to_string(),
            role: role.to_string(),
        },
    })
}
