//! HTTP client for the translation provider.

use std::time::Duration;

use async_trait::async_trait;
use lindholm_core::lang::Lang;
use serde::Deserialize;

use crate::Translate;

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One translated text plus the provider's source-language detection.
#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub text: String,
    pub detected_source_language: String,
}

/// Response body of the translation endpoint.
#[derive(Debug, Deserialize)]
pub struct TranslationsResponse {
    pub translations: Vec<Translation>,
}

/// Errors from the translation API layer.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Translation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// The provider returned 2xx but the body had no translation in it.
    #[error("Malformed translation response: {0}")]
    Malformed(String),
}

/// HTTP client for the translation provider.
pub struct TranslationClient {
    client: reqwest::Client,
    api_url: String,
    auth_key: String,
}

impl TranslationClient {
    /// Create a new client.
    ///
    /// * `api_url`  - full endpoint URL, e.g. `https://api-free.deepl.com/v2/translate`.
    /// * `auth_key` - provider API key.
    pub fn new(api_url: String, auth_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client construction");
        Self {
            client,
            api_url,
            auth_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (connection
    /// pooling across integrations).
    pub fn with_client(client: reqwest::Client, api_url: String, auth_key: String) -> Self {
        Self {
            client,
            api_url,
            auth_key,
        }
    }

    /// Extract the first translation from a decoded response body.
    fn first_translation(body: TranslationsResponse) -> Result<Translation, TranslateError> {
        body.translations
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::Malformed("empty translations array".into()))
    }
}

#[async_trait]
impl Translate for TranslationClient {
    async fn translate(&self, text: &str, target: Lang) -> Result<Translation, TranslateError> {
        let response = self
            .client
            .post(&self.api_url)
            .form(&[
                ("auth_key", self.auth_key.as_str()),
                ("text", text),
                ("target_lang", target.target_code()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TranslateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: TranslationsResponse = response.json().await?;
        let translation = Self::first_translation(body)?;

        tracing::debug!(
            target_lang = target.target_code(),
            detected = %translation.detected_source_language,
            "Text translated"
        );
        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_body_decodes() {
        let json = r#"{"translations":[{"text":"New course start","detected_source_language":"DA"}]}"#;
        let body: TranslationsResponse = serde_json::from_str(json).expect("decode");
        let translation = TranslationClient::first_translation(body).expect("first");
        assert_eq!(translation.text, "New course start");
        assert_eq!(translation.detected_source_language, "DA");
    }

    #[test]
    fn empty_translations_is_malformed() {
        let body: TranslationsResponse =
            serde_json::from_str(r#"{"translations":[]}"#).expect("decode");
        let err = TranslationClient::first_translation(body).unwrap_err();
        assert!(matches!(err, TranslateError::Malformed(_)));
    }

    #[test]
    fn api_error_display_embeds_status_and_body() {
        let err = TranslateError::Api {
            status: 456,
            body: "quota exceeded".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("456"));
        assert!(msg.contains("quota exceeded"));
    }
}
