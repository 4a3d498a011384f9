//! Adapter for the third-party course-booking widget.
//!
//! The booking provider exposes no API; the widget page is fetched and its
//! repeating course fragments are parsed into [`Course`] records. Results
//! are cached in-process for a fixed revalidation window so the public
//! endpoint does not hammer the provider.

mod parser;

use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::Mutex;

pub use parser::parse_courses;

/// Default revalidation window.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One upcoming course parsed from the widget page.
///
/// Fields the page no longer carries come through as empty strings rather
/// than failing the whole listing; see [`parse_courses`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub start_date: String,
    /// Derived from the trailing ` - ` segment of `name`.
    pub location: String,
    pub registration_url: String,
    pub seats_left: Option<u32>,
}

/// Errors from the course feed adapter.
#[derive(Debug, thiserror::Error)]
pub enum CourseFeedError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Course feed error ({status})")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

struct CacheEntry {
    fetched_at: Instant,
    courses: Vec<Course>,
}

/// Fetches and caches the course listing.
pub struct CourseFeed {
    client: reqwest::Client,
    url: String,
    ttl: Duration,
    cache: Mutex<Option<CacheEntry>>,
}

impl CourseFeed {
    /// Create a feed for the fixed widget URL with the given cache window.
    pub fn new(url: String, ttl: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client construction");
        Self {
            client,
            url,
            ttl,
            cache: Mutex::new(None),
        }
    }

    /// The cache window, exposed so the HTTP handler can mirror it in a
    /// `Cache-Control` header.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current course listing, served from cache within the revalidation
    /// window.
    pub async fn courses(&self) -> Result<Vec<Course>, CourseFeedError> {
        let mut cache = self.cache.lock().await;
        if let Some(entry) = cache.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                return Ok(entry.courses.clone());
            }
        }

        let courses = self.fetch().await?;
        *cache = Some(CacheEntry {
            fetched_at: Instant::now(),
            courses: courses.clone(),
        });
        Ok(courses)
    }

    async fn fetch(&self) -> Result<Vec<Course>, CourseFeedError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CourseFeedError::Status {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let courses = parse_courses(&html);
        if courses.is_empty() {
            // Upstream markup drift degrades to an empty list, but loudly:
            // someone has to notice before the public page goes stale.
            tracing::warn!(
                url = %self.url,
                bytes = html.len(),
                "Course feed page yielded no courses"
            );
        } else {
            tracing::debug!(count = courses.len(), "Course feed refreshed");
        }
        Ok(courses)
    }
}
