//! Repository for the `features` table.

use lindholm_core::types::DbId;
use sqlx::PgPool;

use crate::models::feature::{CreateFeature, Feature};

const COLUMNS: &str = "id, label, created_at";

pub struct FeatureRepo;

impl FeatureRepo {
    pub async fn create(pool: &PgPool, input: &CreateFeature) -> Result<Feature, sqlx::Error> {
        let query = format!(
            "INSERT INTO features (label)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(&input.label)
            .fetch_one(pool)
            .await
    }

    /// All features, alphabetically, for the admin lookup list.
    pub async fn list(pool: &PgPool) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features ORDER BY label ASC");
        sqlx::query_as::<_, Feature>(&query).fetch_all(pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM features WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
