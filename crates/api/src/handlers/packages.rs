//! Handlers for the `/packages` and `/features` resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lindholm_core::error::CoreError;
use lindholm_core::types::DbId;
use lindholm_db::models::feature::CreateFeature;
use lindholm_db::models::package::{
    CreatePackage, PackageWithFeatures, UpdatePackage,
};
use lindholm_db::repositories::{FeatureRepo, PackageRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /packages/{id}/features`.
#[derive(Debug, Deserialize)]
pub struct SetFeaturesRequest {
    /// Feature ids in the order they should be displayed.
    pub feature_ids: Vec<DbId>,
}

/// GET /packages
///
/// Public pricing list: every package with its feature bullets.
pub async fn list_packages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let packages = PackageRepo::list(&state.pool).await?;

    let mut data = Vec::with_capacity(packages.len());
    for package in packages {
        let features = PackageRepo::list_features(&state.pool, package.id).await?;
        data.push(PackageWithFeatures { package, features });
    }

    Ok(Json(DataResponse { data }))
}

/// POST /packages
pub async fn create_package(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreatePackage>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Package name is required".into()));
    }
    if input.price_ore < 0 {
        return Err(AppError::BadRequest("Price must not be negative".into()));
    }

    let package = PackageRepo::create(&state.pool, &input).await?;

    tracing::info!(
        member_id = member.member_id,
        package_id = package.id,
        "Package created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: package })))
}

/// PUT /packages/{id}
pub async fn update_package(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePackage>,
) -> AppResult<impl IntoResponse> {
    let package = PackageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Package",
                id,
            })
        })?;

    tracing::info!(member_id = member.member_id, package_id = id, "Package updated");

    Ok(Json(DataResponse { data: package }))
}

/// PUT /packages/{id}/features
///
/// Replace the package's feature assignment, in display order.
pub async fn set_features(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetFeaturesRequest>,
) -> AppResult<impl IntoResponse> {
    let package = PackageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Package",
                id,
            })
        })?;

    PackageRepo::set_features(&state.pool, package.id, &input.feature_ids).await?;
    let features = PackageRepo::list_features(&state.pool, package.id).await?;

    tracing::info!(
        member_id = member.member_id,
        package_id = id,
        feature_count = features.len(),
        "Package features replaced"
    );

    Ok(Json(DataResponse {
        data: PackageWithFeatures { package, features },
    }))
}

/// DELETE /packages/{id}
pub async fn delete_package(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PackageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }));
    }

    tracing::info!(member_id = member.member_id, package_id = id, "Package deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Feature handlers
// ---------------------------------------------------------------------------

/// GET /features
///
/// Admin lookup list, alphabetical.
pub async fn list_features(
    _auth: RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let features = FeatureRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: features }))
}

/// POST /features
pub async fn create_feature(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateFeature>,
) -> AppResult<impl IntoResponse> {
    if input.label.trim().is_empty() {
        return Err(AppError::BadRequest("Feature label is required".into()));
    }

    let feature = FeatureRepo::create(&state.pool, &input).await?;

    tracing::info!(
        member_id = member.member_id,
        feature_id = feature.id,
        label = %feature.label,
        "Feature created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: feature })))
}

/// DELETE /features/{id}
pub async fn delete_feature(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FeatureRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Feature",
            id,
        }));
    }

    tracing::info!(member_id = member.member_id, feature_id = id, "Feature deleted");

    Ok(StatusCode::NO_CONTENT)
}
