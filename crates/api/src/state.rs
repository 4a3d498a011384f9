use std::sync::Arc;

use lindholm_courses::CourseFeed;
use lindholm_mail::Mailer;
use lindholm_social::FeedClient;
use lindholm_storage::ObjectStore;
use lindholm_translate::TranslationClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lindholm_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Translation provider client.
    pub translator: Arc<TranslationClient>,
    /// Object store for normalized images.
    pub store: Arc<dyn ObjectStore>,
    /// Social feed client; `None` disables publishing.
    pub feed: Option<Arc<FeedClient>>,
    /// SMTP mailer; `None` disables submission emails.
    pub mailer: Option<Arc<Mailer>>,
    /// Cached course-listing adapter.
    pub courses: Arc<CourseFeed>,
    /// Shared outbound HTTP client (analytics proxy).
    pub http: reqwest::Client,
}
