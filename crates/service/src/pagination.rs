//! Pagination utilities for service layer
//!
//! Provides a `Pagination` struct that normalizes raw query values and a
//! `Page` result carrying the listing totals.

use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index, never zero
    page: u32,
    /// items per page, unbounded above, never zero
    per_page: u32,
}

impl Pagination {
    /// Zero values fall back to the defaults.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            per_page: if per_page == 0 { DEFAULT_PER_PAGE } else { per_page },
        }
    }

    /// Build from raw query-string values. Missing, non-numeric, zero or
    /// negative values use the defaults.
    pub fn from_query(page: Option<&str>, per_page: Option<&str>) -> Self {
        let parse = |v: Option<&str>| v.and_then(|s| s.parse::<u32>().ok()).unwrap_or(0);
        Self::new(parse(page), parse(per_page))
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Rows to skip, capped to what SQLite accepts as an OFFSET.
    pub fn offset(&self) -> u64 {
        let offset = u64::from(self.page - 1) * u64::from(self.per_page);
        offset.min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    /// `ceil(total / per_page)`; zero when there are no rows.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit())
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: DEFAULT_PAGE, per_page: DEFAULT_PER_PAGE } }
}

/// One page of a listing, serialized as `{items, total, pages, current_page}`.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Self {
            items,
            total,
            pages: pagination.total_pages(total),
            current_page: pagination.page,
        }
    }
}
