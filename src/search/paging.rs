//! Page size/index resolution and paging information

use crate::error::QueryError;
use crate::query::params::{PAGE_INDEX, PAGE_SIZE};
use serde::Serialize;

/// Default number of issues per page
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// System-wide maximum number of matches ever returned
pub const DEFAULT_MAX_RESULTS: usize = 10_000;

/// Requested page size after defaults have been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Limited(usize),
    /// As many as the hard cap allows
    Max,
}

impl PageSize {
    /// Effective number of issues per page under the given hard cap
    pub fn limit(self, max_results: usize) -> usize {
        match self {
            Self::Limited(size) => size.min(max_results).max(1),
            Self::Max => max_results.max(1),
        }
    }
}

/// A resolved page request: size and 1-based index, both positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub size: PageSize,
    pub index: usize,
}

impl PageRequest {
    pub fn new(size: usize, index: usize) -> Self {
        Self {
            size: PageSize::Limited(size.max(1)),
            index: index.max(1),
        }
    }

    /// Offset of the first issue of the page
    pub fn offset(&self, max_results: usize) -> usize {
        (self.index - 1).saturating_mul(self.size.limit(max_results))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 1)
    }
}

/// Paging block of a search response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page_index: usize,
    pub page_size: usize,
    pub total: usize,
    pub pages: usize,
}

/// Rules turning requested paging parameters into effective ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPolicy {
    pub default_page_size: usize,
    pub max_results: usize,
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl PaginationPolicy {
    pub fn new(default_page_size: usize, max_results: usize) -> Self {
        Self {
            default_page_size: default_page_size.max(1),
            max_results: max_results.max(1),
        }
    }

    /// Resolve the requested page size and index.
    ///
    /// Without an explicit size, a query scoped to components is not paged;
    /// `-1` asks for as many issues as the hard cap allows.
    pub fn resolve(
        &self,
        requested_page_size: Option<i32>,
        requested_page_index: Option<i32>,
        has_component_filter: bool,
    ) -> Result<PageRequest, QueryError> {
        let size = match requested_page_size {
            None if has_component_filter => PageSize::Max,
            None => PageSize::Limited(self.default_page_size),
            Some(-1) => PageSize::Max,
            Some(size) if size >= 1 => PageSize::Limited(size as usize),
            Some(size) => {
                return Err(QueryError::invalid(
                    PAGE_SIZE,
                    size.to_string(),
                    "page size must be -1 or a positive integer",
                ))
            }
        };

        let index = match requested_page_index {
            None => 1,
            Some(index) if index >= 1 => index as usize,
            Some(index) => {
                return Err(QueryError::invalid(
                    PAGE_INDEX,
                    index.to_string(),
                    "page index must be greater than 0",
                ))
            }
        };

        Ok(PageRequest { size, index })
    }

    /// Paging block for `total` matches
    pub fn paging(&self, page: PageRequest, total: usize) -> Paging {
        let page_size = page.size.limit(self.max_results);
        Paging {
            page_index: page.index,
            page_size,
            total,
            pages: total.div_ceil(page_size),
        }
    }

    /// Whether some matching issues were never counted
    pub fn max_results_reached(&self, truncated: bool, total: usize) -> bool {
        truncated || total > self.max_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size() {
        let policy = PaginationPolicy::default();
        let page = policy.resolve(None, None, false).unwrap();
        assert_eq!(page, PageRequest::new(100, 1));
        assert_eq!(policy.paging(page, 0).page_size, 100);
    }

    #[test]
    fn test_component_filter_is_unbounded_up_to_hard_cap() {
        let policy = PaginationPolicy::default();
        let page = policy.resolve(None, None, true).unwrap();
        assert_eq!(page.size, PageSize::Max);
        assert_eq!(policy.paging(page, 250).page_size, DEFAULT_MAX_RESULTS);
        assert_eq!(policy.paging(page, 250).pages, 1);

        // An explicit size wins over the component default
        let page = policy.resolve(Some(20), None, true).unwrap();
        assert_eq!(page.size, PageSize::Limited(20));
    }

    #[test]
    fn test_minus_one_means_hard_cap() {
        let policy = PaginationPolicy::new(100, 500);
        let page = policy.resolve(Some(-1), Some(1), false).unwrap();
        assert_eq!(policy.paging(page, 10).page_size, 500);
    }

    #[test]
    fn test_out_of_range_values() {
        let policy = PaginationPolicy::default();
        assert!(matches!(
            policy.resolve(None, Some(0), false),
            Err(QueryError::InvalidParameter { ref param, .. }) if param == PAGE_INDEX
        ));
        assert!(matches!(
            policy.resolve(Some(0), None, false),
            Err(QueryError::InvalidParameter { ref param, .. }) if param == PAGE_SIZE
        ));
        assert!(policy.resolve(Some(-2), None, false).is_err());
    }

    #[test]
    fn test_pages_is_ceiling() {
        let policy = PaginationPolicy::default();
        for (total, size, pages) in [(0, 50, 0), (1, 50, 1), (50, 50, 1), (51, 50, 2), (120, 50, 3)] {
            let paging = policy.paging(PageRequest::new(size, 1), total);
            assert_eq!(paging.pages, pages, "total={total} size={size}");
        }
    }

    #[test]
    fn test_scenario_fifty_per_page() {
        let policy = PaginationPolicy::default();
        let page = policy.resolve(Some(50), Some(1), false).unwrap();
        assert_eq!(
            policy.paging(page, 120),
            Paging {
                page_index: 1,
                page_size: 50,
                total: 120,
                pages: 3
            }
        );
    }

    #[test]
    fn test_max_results_reached() {
        let policy = PaginationPolicy::new(100, 1_000);
        assert!(!policy.max_results_reached(false, 1_000));
        assert!(policy.max_results_reached(false, 1_001));
        assert!(policy.max_results_reached(true, 10));
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(50, 3).offset(10_000), 100);
        let max = PageRequest {
            size: PageSize::Max,
            index: 2,
        };
        assert_eq!(max.offset(1_000), 1_000);
    }
}
