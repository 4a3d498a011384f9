//! Local filesystem storage backend (development default).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::backend::{ObjectStore, StorageError};

/// Stores objects as plain files under a base directory, mirroring the
/// key's path structure. The directory is expected to be served as static
/// files under `public_base_url` by a reverse proxy or the dev frontend.
pub struct LocalStore {
    base_path: PathBuf,
    public_base_url: String,
}

impl LocalStore {
    pub fn new(base_path: PathBuf, public_base_url: String) -> Self {
        Self {
            base_path,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    async fn ensure_parent(path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let path = self.key_path(key);
        Self::ensure_parent(&path).await?;
        fs::write(&path, bytes).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(key.to_string())
            } else {
                StorageError::Io(e)
            }
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_delete_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalStore::new(dir.path().to_path_buf(), "http://localhost/media".into());

        store
            .put("news/7/abc.jpg", vec![1, 2, 3], "image/jpeg")
            .await
            .expect("put");
        assert!(dir.path().join("news/7/abc.jpg").exists());

        store.delete("news/7/abc.jpg").await.expect("delete");
        assert!(!dir.path().join("news/7/abc.jpg").exists());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalStore::new(dir.path().to_path_buf(), "http://localhost/media".into());

        let err = store.delete("news/7/missing.jpg").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[test]
    fn public_url_joins_without_double_slash() {
        let store = LocalStore::new(PathBuf::from("/tmp"), "http://localhost/media/".into());
        assert_eq!(
            store.public_url("news/7/abc.jpg"),
            "http://localhost/media/news/7/abc.jpg"
        );
    }
}
