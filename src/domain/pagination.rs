//! Page/page-size normalization for the employee listing.

use crate::constants::listing::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, EMPLOYEES_CACHE_KEY, MAX_PAGE_SIZE,
};

/// Validated pagination parameters.
///
/// Construction goes through [`Pagination::from_query`] (or [`Pagination::new`]),
/// so every instance already has defaults applied and two requests that mean
/// the same page share one cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    page_size: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Normalizes already-numeric values.
    ///
    /// `page < 1` falls back to 1. `page_size` outside `1..=100` falls back to
    /// 10; oversized values are reset to the default, not capped at 100.
    #[must_use]
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);

        let page_size = u64::try_from(page_size)
            .ok()
            .filter(|s| (1..=MAX_PAGE_SIZE).contains(s))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self { page, page_size }
    }

    /// Normalizes raw query-string values. Missing or non-numeric input takes
    /// the default for that parameter.
    #[must_use]
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = page
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE as i64);
        let page_size = page_size
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE as i64);

        Self::new(page, page_size)
    }

    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Cache key for this page of the employee listing.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!(
            "{EMPLOYEES_CACHE_KEY}:page:{}:size:{}",
            self.page, self.page_size
        )
    }

    /// Row offset of this page, or `None` when it is past anything SQL can
    /// address.
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        page_offset(self.page, self.page_size)
    }

    /// `ceil(total / page_size)`; zero rows means zero pages.
    #[must_use]
    pub const fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.page_size)
    }
}

/// `(page - 1) * page_size`, if it fits a signed 64-bit SQL offset.
#[must_use]
pub fn page_offset(page: u64, page_size: u64) -> Option<u64> {
    page.saturating_sub(1)
        .checked_mul(page_size)
        .filter(|offset| i64::try_from(*offset).is_ok())
}
