//! Client for the external text-translation API.
//!
//! One POST per call, no retry, no caching: the content admin is a
//! low-volume tool and every submission re-translates from scratch.

mod client;

pub use client::{Translation, TranslationClient, TranslationsResponse, TranslateError};

use async_trait::async_trait;
use lindholm_core::lang::Lang;

/// Seam for the translation call so the content workflow can be exercised
/// against a stub.
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate `text` into `target`, reporting the detected source
    /// language alongside the translated text.
    async fn translate(&self, text: &str, target: Lang) -> Result<Translation, TranslateError>;
}
