//! Catalog filtering and pagination types.
//!
//! `CatalogFilter` is the structured filter object the product repository
//! composes its parameterized query from; user input never reaches the SQL
//! text itself.

use crate::models::product::Product;

/// Products shown per dashboard page.
pub const PER_PAGE: i64 = 5;

/// Filter parameters for a catalog listing.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    search: Option<String>,
    category: Option<String>,
    page: u32,
}

impl CatalogFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Empty strings are treated as absent predicates; `page` is 1-based and
    /// clamped against the result size when the query runs.
    #[must_use]
    pub fn new(search: Option<String>, category: Option<String>, page: Option<u32>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            category: category.filter(|c| !c.is_empty()),
            page: page.unwrap_or(1),
        }
    }

    /// Substring to match against product names, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Category to match exactly, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The requested (unclamped) 1-based page.
    #[must_use]
    pub const fn requested_page(&self) -> u32 {
        self.page
    }
}

/// One page of catalog results plus the count of all matches.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    /// Up to [`PER_PAGE`] matching products.
    pub products: Vec<Product>,
    /// Total matches ignoring pagination.
    pub total: i64,
    /// The effective (clamped) 1-based page these products belong to.
    pub page: u32,
    /// `ceil(total / PER_PAGE)`; 0 when there are no matches.
    pub total_pages: u32,
}

/// Number of pages needed for `total` results.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn total_pages(total: i64) -> u32 {
    ((total.max(0) + PER_PAGE - 1) / PER_PAGE) as u32
}

/// Clamp a requested 1-based page into the valid range.
///
/// Out-of-range values (0, or past the last page) land on the nearest valid
/// page; an empty result set still has a well-defined page 1 so the offset
/// can never go negative.
#[must_use]
pub fn clamp_page(requested: u32, total_pages: u32) -> u32 {
    requested.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_boundaries() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(11), 3);
    }

    #[test]
    fn test_clamp_page_zero_goes_to_first() {
        assert_eq!(clamp_page(0, 3), 1);
    }

    #[test]
    fn test_clamp_page_past_end_goes_to_last() {
        assert_eq!(clamp_page(99, 3), 3);
    }

    #[test]
    fn test_clamp_page_empty_results() {
        // No matches: still page 1, offset 0.
        assert_eq!(clamp_page(1, 0), 1);
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn test_clamp_page_in_range_unchanged() {
        assert_eq!(clamp_page(2, 3), 2);
    }

    #[test]
    fn test_filter_normalizes_empty_strings() {
        let filter = CatalogFilter::new(Some(String::new()), Some(String::new()), None);
        assert_eq!(filter.search(), None);
        assert_eq!(filter.category(), None);
        assert_eq!(filter.requested_page(), 1);
    }

    #[test]
    fn test_filter_keeps_values() {
        let filter = CatalogFilter::new(
            Some("drill".to_string()),
            Some("Tools".to_string()),
            Some(2),
        );
        assert_eq!(filter.search(), Some("drill"));
        assert_eq!(filter.category(), Some("Tools"));
        assert_eq!(filter.requested_page(), 2);
    }
}
