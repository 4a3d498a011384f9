use crate::auth::jwt::JwtConfig;

/// Default translation endpoint.
const DEFAULT_TRANSLATE_API_URL: &str = "https://api-free.deepl.com/v2/translate";

/// Default social graph API base.
const DEFAULT_FEED_GRAPH_URL: &str = "https://graph.facebook.com/v19.0";

/// Default host used to derive public post URLs.
const DEFAULT_FEED_POST_HOST: &str = "facebook.com";

/// Default booking-widget page the course listing is scraped from.
const DEFAULT_COURSE_FEED_URL: &str = "https://booking.koereskole-holdplan.dk/widget/lindholm";

/// Default analytics API base.
const DEFAULT_ANALYTICS_API_URL: &str = "https://plausible.io/api/v1";

/// Social feed credentials, present only when publishing is configured.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub graph_url: String,
    pub post_host: String,
    pub access_token: String,
}

/// Analytics provider credentials, present only when the dashboard proxy
/// is configured.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub api_url: String,
    pub site_id: String,
    pub api_key: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Translation endpoint URL.
    pub translate_api_url: String,
    /// Translation provider API key.
    pub translate_auth_key: String,
    /// Social feed publishing, when configured.
    pub feed: Option<FeedConfig>,
    /// Booking-widget page for the course listing.
    pub course_feed_url: String,
    /// Course cache revalidation window in seconds (default: `300`).
    pub course_feed_ttl_secs: u64,
    /// Analytics proxy, when configured.
    pub analytics: Option<AnalyticsConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Required | Default                          |
    /// |-------------------------|----------|----------------------------------|
    /// | `HOST`                  | no       | `0.0.0.0`                        |
    /// | `PORT`                  | no       | `3000`                           |
    /// | `CORS_ORIGINS`          | no       | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS`  | no       | `30`                             |
    /// | `TRANSLATE_API_URL`     | no       | DeepL free endpoint              |
    /// | `TRANSLATE_AUTH_KEY`    | **yes**  | --                               |
    /// | `FEED_ACCESS_TOKEN`     | no       | -- (publishing off when unset)   |
    /// | `FEED_GRAPH_URL`        | no       | `https://graph.facebook.com/v19.0` |
    /// | `FEED_POST_HOST`        | no       | `facebook.com`                   |
    /// | `COURSE_FEED_URL`       | no       | provider widget page             |
    /// | `COURSE_FEED_TTL_SECS`  | no       | `300`                            |
    /// | `ANALYTICS_API_KEY`     | no       | -- (proxy off when unset)        |
    /// | `ANALYTICS_SITE_ID`     | with key | --                               |
    /// | `ANALYTICS_API_URL`     | no       | `https://plausible.io/api/v1`    |
    ///
    /// JWT variables are documented on [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let translate_api_url = std::env::var("TRANSLATE_API_URL")
            .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.into());
        let translate_auth_key = std::env::var("TRANSLATE_AUTH_KEY")
            .expect("TRANSLATE_AUTH_KEY must be set in the environment");

        let feed = std::env::var("FEED_ACCESS_TOKEN")
            .ok()
            .map(|access_token| FeedConfig {
                graph_url: std::env::var("FEED_GRAPH_URL")
                    .unwrap_or_else(|_| DEFAULT_FEED_GRAPH_URL.into()),
                post_host: std::env::var("FEED_POST_HOST")
                    .unwrap_or_else(|_| DEFAULT_FEED_POST_HOST.into()),
                access_token,
            });

        let course_feed_url = std::env::var("COURSE_FEED_URL")
            .unwrap_or_else(|_| DEFAULT_COURSE_FEED_URL.into());
        let course_feed_ttl_secs: u64 = std::env::var("COURSE_FEED_TTL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("COURSE_FEED_TTL_SECS must be a valid u64");

        let analytics = std::env::var("ANALYTICS_API_KEY")
            .ok()
            .map(|api_key| AnalyticsConfig {
                api_url: std::env::var("ANALYTICS_API_URL")
                    .unwrap_or_else(|_| DEFAULT_ANALYTICS_API_URL.into()),
                site_id: std::env::var("ANALYTICS_SITE_ID")
                    .expect("ANALYTICS_SITE_ID must be set when ANALYTICS_API_KEY is"),
                api_key,
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            translate_api_url,
            translate_auth_key,
            feed,
            course_feed_url,
            course_feed_ttl_secs,
            analytics,
        }
    }
}
