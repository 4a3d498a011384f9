//! Backend selection from environment variables.

use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::ObjectStore;
use crate::local::LocalStore;
use crate::s3::S3Store;

/// Default local media directory.
const DEFAULT_LOCAL_PATH: &str = "./media";

/// Default public base URL for locally stored media.
const DEFAULT_LOCAL_PUBLIC_URL: &str = "http://localhost:3000/media";

/// Which object-store backend to run, resolved from the environment.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Local {
        base_path: PathBuf,
        public_base_url: String,
    },
    S3 {
        bucket: String,
        public_base_url: String,
    },
}

impl StorageConfig {
    /// Load the storage configuration from environment variables.
    ///
    /// | Env Var              | Required        | Default                         |
    /// |----------------------|-----------------|---------------------------------|
    /// | `STORAGE_BACKEND`    | no              | `local`                         |
    /// | `STORAGE_PATH`       | no (local only) | `./media`                       |
    /// | `STORAGE_PUBLIC_URL` | no              | `http://localhost:3000/media`   |
    /// | `S3_BUCKET`          | s3 only         | --                              |
    ///
    /// # Panics
    ///
    /// Panics on an unknown `STORAGE_BACKEND` value or a missing
    /// `S3_BUCKET` when the s3 backend is selected -- misconfiguration
    /// should fail at startup.
    pub fn from_env() -> Self {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());
        let public_base_url = std::env::var("STORAGE_PUBLIC_URL")
            .unwrap_or_else(|_| DEFAULT_LOCAL_PUBLIC_URL.into());

        match backend.as_str() {
            "local" => StorageConfig::Local {
                base_path: PathBuf::from(
                    std::env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_LOCAL_PATH.into()),
                ),
                public_base_url,
            },
            "s3" => StorageConfig::S3 {
                bucket: std::env::var("S3_BUCKET")
                    .expect("S3_BUCKET must be set when STORAGE_BACKEND=s3"),
                public_base_url,
            },
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Must be 'local' or 's3'"),
        }
    }

    /// Construct the configured backend.
    pub async fn build(self) -> Arc<dyn ObjectStore> {
        match self {
            StorageConfig::Local {
                base_path,
                public_base_url,
            } => {
                tracing::info!(path = %base_path.display(), "Using local object store");
                Arc::new(LocalStore::new(base_path, public_base_url))
            }
            StorageConfig::S3 {
                bucket,
                public_base_url,
            } => {
                tracing::info!(bucket = %bucket, "Using S3 object store");
                Arc::new(S3Store::from_env(bucket, public_base_url).await)
            }
        }
    }
}
