//! Common types used across the API

use serde::{Deserialize, Serialize};

/// Default page size when `limit` is omitted
pub const DEFAULT_LIMIT: i64 = 100;

/// Upper bound for `limit`
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Offset pagination parameters (`?skip=&limit=`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    /// Offset actually sent to the database; negative values become 0
    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    /// Row limit actually sent to the database, clamped to `[0, MAX_PAGE_LIMIT]`
    pub fn limit(&self) -> i64 {
        self.limit.clamp(0, MAX_PAGE_LIMIT)
    }
}

/// Paginated list envelope: `{ "data": [...], "count": N }`
///
/// `count` is the number of rows matching the query regardless of paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub count: i64,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, count: i64) -> Self {
        Self { data, count }
    }
}

/// Generic confirmation message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `"{entity} deleted successfully"`
    pub fn deleted(entity: &str) -> Self {
        Self::new(format!("{} deleted successfully", entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p, Pagination::new(0, 100));
    }

    #[test]
    fn test_pagination_clamps() {
        let p = Pagination::new(-5, 5000);
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), MAX_PAGE_LIMIT);

        let p = Pagination::new(10, -1);
        assert_eq!(p.limit(), 0);
    }

    #[test]
    fn test_large_skip_is_passed_through() {
        let p = Pagination::new(1500, 10);
        assert_eq!(p.offset(), 1500);
        assert_eq!(p.limit(), 10);
    }

    #[test]
    fn test_deleted_message() {
        assert_eq!(
            Message::deleted("Store").message,
            "Store deleted successfully"
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_offset_and_limit_are_never_negative(skip in i64::MIN..i64::MAX, limit in -50i64..5000) {
            let page = Pagination::new(skip, limit);
            proptest::prop_assert_eq!(page.offset(), skip.max(0));
            proptest::prop_assert!((0..=MAX_PAGE_LIMIT).contains(&page.limit()));
        }
    }
}
