//! Client for the social feed posting API.
//!
//! Publishing is two calls: `GET {graph}/accounts` resolves the page the
//! school can post as (with its page-scoped token), then
//! `POST {graph}/{page_id}/feed` creates the post. The returned post id is
//! turned into a public URL as `https://{host}/{id}`.

use std::time::Duration;

use serde::Deserialize;

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the social feed API layer.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The feed API returned a non-2xx status code.
    #[error("Feed API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// The account list came back empty; there is nothing to post as.
    #[error("No postable account available")]
    NoAccount,
}

/// One entry of the `accounts` response.
#[derive(Debug, Deserialize)]
pub struct Account {
    pub id: String,
    /// Page-scoped access token used for the feed call.
    pub access_token: String,
}

/// Response body of the `accounts` endpoint.
#[derive(Debug, Deserialize)]
pub struct AccountsResponse {
    pub data: Vec<Account>,
}

/// Response body of the `feed` endpoint.
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
}

/// HTTP client for the social feed API.
pub struct FeedClient {
    client: reqwest::Client,
    graph_url: String,
    post_host: String,
    access_token: String,
}

impl FeedClient {
    /// Create a new client.
    ///
    /// * `graph_url`    - API base URL, e.g. `https://graph.facebook.com/v19.0`.
    /// * `post_host`    - host used to derive public post URLs.
    /// * `access_token` - long-lived user token used to resolve the page.
    pub fn new(graph_url: String, post_host: String, access_token: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client construction");
        Self {
            client,
            graph_url,
            post_host,
            access_token,
        }
    }

    /// Resolve the first postable account (page id + page token).
    async fn resolve_account(&self) -> Result<Account, FeedError> {
        let response = self
            .client
            .get(format!("{}/me/accounts", self.graph_url))
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .await?;

        let body: AccountsResponse = Self::parse_response(response).await?;
        body.data.into_iter().next().ok_or(FeedError::NoAccount)
    }

    /// Publish `message` (optionally with a link) to the feed, returning
    /// the public URL of the created post.
    pub async fn publish(&self, message: &str, link: Option<&str>) -> Result<String, FeedError> {
        let account = self.resolve_account().await?;

        let mut form: Vec<(&str, &str)> = vec![
            ("message", message),
            ("access_token", account.access_token.as_str()),
        ];
        if let Some(link) = link {
            form.push(("link", link));
        }

        let response = self
            .client
            .post(format!("{}/{}/feed", self.graph_url, account.id))
            .form(&form)
            .send()
            .await?;

        let body: PostResponse = Self::parse_response(response).await?;
        let url = Self::post_url(&self.post_host, &body.id);

        tracing::info!(post_id = %body.id, "Published to social feed");
        Ok(url)
    }

    /// Derive the public URL of a post from its id.
    fn post_url(host: &str, id: &str) -> String {
        format!("https://{host}/{id}")
    }

    /// Parse a JSON response body, mapping non-2xx to [`FeedError::Api`].
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, FeedError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FeedError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accounts_response_decodes() {
        let json = r#"{"data":[{"id":"1017","access_token":"page-token"}]}"#;
        let body: AccountsResponse = serde_json::from_str(json).expect("decode");
        assert_eq!(body.data.len(), 1);
        assert_eq!(body.data[0].id, "1017");
    }

    #[test]
    fn post_response_decodes() {
        let body: PostResponse =
            serde_json::from_str(r#"{"id":"1017_42"}"#).expect("decode");
        assert_eq!(body.id, "1017_42");
    }

    #[test]
    fn post_url_derivation() {
        assert_eq!(
            FeedClient::post_url("facebook.com", "1017_42"),
            "https://facebook.com/1017_42"
        );
    }

    #[test]
    fn api_error_display_embeds_diagnostics() {
        let err = FeedError::Api {
            status: 403,
            body: "token expired".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("token expired"));
    }
}
