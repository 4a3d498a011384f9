//! S3 storage backend (production).

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::backend::{ObjectStore, StorageError};

/// Stores objects in a single S3 bucket. Objects are expected to be
/// publicly readable through `public_base_url` (a CDN or the bucket's
/// website endpoint).
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Store {
    /// Build a store from the ambient AWS environment (credentials chain,
    /// region, etc.).
    pub async fn from_env(bucket: String, public_base_url: String) -> Self {
        let config = aws_config::load_from_env().await;
        Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}
