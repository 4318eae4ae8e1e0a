//! Pagination request and envelope types.

use serde::{Deserialize, Serialize};

/// Default page number when the caller omits or zeroes it.
const DEFAULT_PAGE: usize = 1;

/// Default page size when the caller omits or zeroes it.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Validated 1-indexed pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Creates a pagination request. Zero values fall back to the defaults
    /// (page 1, page size 10).
    #[must_use]
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Returns the 1-indexed page number.
    #[must_use]
    pub const fn page(self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(self) -> usize {
        self.page_size
    }

    /// Returns the number of leading items to skip.
    #[must_use]
    pub const fn skip(self) -> usize {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// Pagination metadata reported alongside a page of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 1-indexed page number.
    pub page: usize,
    /// Requested page size.
    pub page_size: usize,
    /// Total matching items across all pages.
    pub total_items: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_previous: bool,
}

impl PageInfo {
    /// Computes pagination metadata for a request and total item count.
    #[must_use]
    pub const fn compute(request: PageRequest, total_items: usize) -> Self {
        Self {
            page: request.page(),
            page_size: request.page_size(),
            total_items,
            total_pages: total_items.div_ceil(request.page_size()),
            has_next: request.skip() + request.page_size() < total_items,
            has_previous: request.page() > 1,
        }
    }
}

/// A page of data with its pagination envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}
