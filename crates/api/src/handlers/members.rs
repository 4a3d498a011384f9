//! Admin-only member management handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lindholm_core::error::CoreError;
use lindholm_core::roles::validate_role;
use lindholm_core::types::DbId;
use lindholm_db::models::member::{CreateMember, Member, UpdateMember};
use lindholm_db::repositories::{MemberRepo, PermissionRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /members`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "Display name is required"))]
    pub display_name: String,
    pub password: String,
    pub role: String,
}

/// Request body for `PUT /members/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: String,
}

/// A member together with their granted role.
#[derive(Debug, Serialize)]
pub struct MemberWithRole {
    #[serde(flatten)]
    pub member: Member,
    pub role: Option<String>,
}

/// GET /members
pub async fn list_members(
    _auth: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let members = MemberRepo::list(&state.pool).await?;

    let mut data = Vec::with_capacity(members.len());
    for member in members {
        let role = PermissionRepo::role_for_member(&state.pool, member.id).await?;
        data.push(MemberWithRole { member, role });
    }

    Ok(Json(DataResponse { data }))
}

/// POST /members
pub async fn create_member(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMemberRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;
    validate_role(&input.role).map_err(AppError::BadRequest)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let member = MemberRepo::create(
        &state.pool,
        &CreateMember {
            email: input.email.to_lowercase(),
            display_name: input.display_name.clone(),
            password_hash,
        },
    )
    .await?;

    let permission = PermissionRepo::set_role(&state.pool, member.id, &input.role).await?;

    tracing::info!(
        admin_id = admin.member_id,
        member_id = member.id,
        role = %permission.role,
        "Member created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: MemberWithRole {
                member,
                role: Some(permission.role),
            },
        }),
    ))
}

/// PUT /members/{id}
pub async fn update_member(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMember>,
) -> AppResult<impl IntoResponse> {
    let member = MemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Member",
                id,
            })
        })?;

    let role = PermissionRepo::role_for_member(&state.pool, member.id).await?;

    tracing::info!(admin_id = admin.member_id, member_id = id, "Member updated");

    Ok(Json(DataResponse {
        data: MemberWithRole { member, role },
    }))
}

/// PUT /members/{id}/role
pub async fn set_role(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetRoleRequest>,
) -> AppResult<impl IntoResponse> {
    validate_role(&input.role).map_err(AppError::BadRequest)?;

    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Member",
                id,
            })
        })?;

    let permission = PermissionRepo::set_role(&state.pool, member.id, &input.role).await?;

    tracing::info!(
        admin_id = admin.member_id,
        member_id = id,
        role = %permission.role,
        "Member role changed"
    );

    Ok(Json(DataResponse {
        data: MemberWithRole {
            member,
            role: Some(permission.role),
        },
    }))
}

/// DELETE /members/{id}
pub async fn delete_member(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if admin.member_id == id {
        return Err(AppError::BadRequest(
            "You cannot delete your own account".into(),
        ));
    }

    let deleted = MemberRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }));
    }

    tracing::info!(admin_id = admin.member_id, member_id = id, "Member deleted");

    Ok(StatusCode::NO_CONTENT)
}
