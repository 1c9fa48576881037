//! Page-based pagination for list endpoints.
//!
//! Clients pass a 1-indexed `page` query parameter. Anything that does not
//! parse as a positive integer falls back to the first page rather than
//! failing the request.
//!
//! # Example
//!
//! ```ignore
//! // GET /api/blogs?page=3
//! let page = query.index();
//! let meta = PaginationMeta::new(total, page, DEFAULT_PAGE_SIZE);
//! let blogs = repo.list_blogs(meta.limit, meta.offset).await?;
//! ```

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Parses a raw page number, clamping invalid or non-positive input to 1.
pub fn page_index(page: Option<&str>) -> i64 {
    page.and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1)
        .max(1)
}

/// Query parameters accepted by paginated endpoints.
///
/// `page` is kept as a raw string so a malformed value degrades to page 1
/// instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    pub page: Option<String>,
}

impl PageQuery {
    pub fn index(&self) -> i64 {
        page_index(self.page.as_deref())
    }
}

/// Metadata about a paginated response.
///
/// ```json
/// { "total": 42, "page": 2, "limit": 10, "offset": 10, "page_count": 5, "has_more": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Maximum items per page
    pub limit: i64,
    /// Number of items skipped
    pub offset: i64,
    /// Number of pages needed for `total` items
    pub page_count: i64,
    /// Whether there are more items after this page
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let total = total.max(0);
        let limit = limit.max(1);
        let page = page.max(1);
        let offset = (page - 1).saturating_mul(limit);
        let page_count = total / limit + i64::from(total % limit != 0);

        Self {
            total,
            page,
            limit,
            offset,
            page_count,
            has_more: offset.saturating_add(limit) < total,
        }
    }

    /// True when the requested page lies past the last item.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.total
    }
}
