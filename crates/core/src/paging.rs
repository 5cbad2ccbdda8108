//! Pagination defaults and clamping for public list endpoints.

/// Default page number when the client does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of results per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Maximum number of results per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a client-supplied page number to a sane value (>= 1).
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

/// Clamp a client-supplied page size into `[1, MAX_PAGE_LIMIT]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
}

/// Row offset for a 1-based page number.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}
