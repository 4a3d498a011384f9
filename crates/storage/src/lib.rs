//! Object storage for normalized images.
//!
//! [`ObjectStore`] abstracts over the local-filesystem backend used in
//! development and the S3 backend used in production. Keys are
//! forward-slash paths generated by the callers (e.g.
//! `news/{member}/{uuid}.jpg`); public URLs are derived by joining the
//! configured public base URL with the key.

mod backend;
mod config;
mod local;
mod s3;

pub use backend::{ObjectStore, StorageError};
pub use config::StorageConfig;
pub use local::LocalStore;
pub use s3::S3Store;
