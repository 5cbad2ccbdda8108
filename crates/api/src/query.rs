//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication. Values are clamped via
//! `rynvlabs_core::paging` before reaching the repository layer.

use serde::Deserialize;

/// Pagination parameters for public list endpoints (`?page=&limit=`).
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Free-text search parameter shared by admin list endpoints (`?search=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}
