//! Pagination clamping shared by every paginated repository query.
//!
//! The HTTP boundary speaks `page`/`limit`; repositories speak
//! `limit`/`offset`. The conversion and clamping happen here, once.

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Hard cap on page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp an optional caller-supplied limit into `[1, MAX_PAGE_SIZE]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Convert an optional 1-based page number plus a clamped limit into a row
/// offset. Page numbers below 1 are treated as page 1.
pub fn page_offset(page: Option<i64>, limit: i64) -> i64 {
    let page = page.unwrap_or(1).max(1);
    (page - 1) * limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
        assert_eq!(clamp_limit(Some(MAX_PAGE_SIZE + 1)), MAX_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(42)), 42);
    }

    #[test]
    fn offset_is_zero_based_from_one_based_pages() {
        assert_eq!(page_offset(None, 20), 0);
        assert_eq!(page_offset(Some(1), 20), 0);
        assert_eq!(page_offset(Some(3), 20), 40);
        assert_eq!(page_offset(Some(0), 20), 0);
        assert_eq!(page_offset(Some(-2), 20), 0);
    }
}
