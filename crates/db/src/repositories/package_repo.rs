//! Repository for the `packages` and `package_features` tables.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::feature::Feature;
use crate::models::package::{CreatePackage, Package, UpdatePackage};

const COLUMNS: &str = "id, name, price_ore, description, sort_order, created_at, updated_at";

/// Provides CRUD operations for lesson packages and their feature
/// assignments.
pub struct PackageRepo;

impl PackageRepo {
    pub async fn create(pool: &PgPool, input: &CreatePackage) -> Result<Package, sqlx::Error> {
        let sort_order = input.sort_order.unwrap_or(0);
        let query = format!(
            "INSERT INTO packages (name, price_ore, description, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(&input.name)
            .bind(input.price_ore)
            .bind(&input.description)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packages WHERE id = $1");
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all packages in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM packages
             ORDER BY sort_order ASC, name ASC"
        );
        sqlx::query_as::<_, Package>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePackage,
    ) -> Result<Option<Package>, sqlx::Error> {
        let query = format!(
            "UPDATE packages SET
                name = COALESCE($2, name),
                price_ore = COALESCE($3, price_ore),
                description = COALESCE($4, description),
                sort_order = COALESCE($5, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price_ore)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Features assigned to a package, in assignment order.
    pub async fn list_features(
        pool: &PgPool,
        package_id: DbId,
    ) -> Result<Vec<Feature>, sqlx::Error> {
        sqlx::query_as::<_, Feature>(
            "SELECT f.id, f.label, f.created_at
             FROM package_features pf
             JOIN features f ON f.id = pf.feature_id
             WHERE pf.package_id = $1
             ORDER BY pf.sort_order ASC",
        )
        .bind(package_id)
        .fetch_all(pool)
        .await
    }

    /// Replace a package's feature assignments with the given feature ids,
    /// preserving the order they are passed in. Runs as sequential
    /// statements, not a transaction.
    pub async fn set_features(
        pool: &PgPool,
        package_id: DbId,
        feature_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM package_features WHERE package_id = $1")
            .bind(package_id)
            .execute(pool)
            .await?;

        for (position, feature_id) in feature_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO package_features (package_id, feature_id, sort_order)
                 VALUES ($1, $2, $3)",
            )
            .bind(package_id)
            .bind(feature_id)
            .bind(position as i32)
            .execute(pool)
            .await?;
        }
        Ok(())
    }
}
