//! Shared query parameter types for API handlers.

use lindholm_core::pagination::{clamp_limit, page_offset};
use serde::Deserialize;

/// Generic pagination parameters (`?page=&limit=`).
///
/// Pages are 1-based. Values are clamped via `lindholm_core::pagination`
/// before they reach a repository.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Resolve into `(page, limit, offset)` with clamping applied.
    pub fn resolve(&self) -> (i64, i64, i64) {
        let limit = clamp_limit(self.limit);
        let page = self.page.unwrap_or(1).max(1);
        (page, limit, page_offset(self.page, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults() {
        let params = PageParams {
            page: None,
            limit: None,
        };
        assert_eq!(params.resolve(), (1, 20, 0));
    }

    #[test]
    fn resolve_clamps_and_offsets() {
        let params = PageParams {
            page: Some(3),
            limit: Some(500),
        };
        assert_eq!(params.resolve(), (3, 100, 200));
    }
}
