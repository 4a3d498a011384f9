//! Lesson package model.

use lindholm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::feature::Feature;

/// A row from the `packages` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Package {
    pub id: DbId,
    pub name: String,
    /// Price in øre (1 DKK = 100 øre) to avoid floating point.
    pub price_ore: i64,
    pub description: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A package together with its assigned features, in display order.
#[derive(Debug, Serialize)]
pub struct PackageWithFeatures {
    #[serde(flatten)]
    pub package: Package,
    pub features: Vec<Feature>,
}

/// DTO for creating a package.
#[derive(Debug, Deserialize)]
pub struct CreatePackage {
    pub name: String,
    pub price_ore: i64,
    pub description: String,
    pub sort_order: Option<i32>,
}

/// DTO for updating a package.
#[derive(Debug, Deserialize)]
pub struct UpdatePackage {
    pub name: Option<String>,
    pub price_ore: Option<i64>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}
