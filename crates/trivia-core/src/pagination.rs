//! Fixed-size, 1-based pagination over an id-ordered result set

use std::ops::Range;

/// Default number of questions per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A requested page number (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest(i64);

impl PageRequest {
    pub fn new(page: i64) -> Self {
        Self(page)
    }

    pub fn first() -> Self {
        Self(1)
    }

    /// Parse the raw `page` query value
    ///
    /// Absent or non-integer values fall back to page 1.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Self)
            .unwrap_or_else(Self::first)
    }

    pub fn number(&self) -> i64 {
        self.0
    }

    /// Index range `[(page-1)*size, page*size)` clamped to `len`
    ///
    /// Pages below 1 (and pages whose offset overflows) yield an empty range.
    pub fn bounds(&self, page_size: usize, len: usize) -> Range<usize> {
        let Some(index) = self.0.checked_sub(1).and_then(|i| usize::try_from(i).ok()) else {
            return 0..0;
        };
        let start = index.saturating_mul(page_size).min(len);
        let end = start.saturating_add(page_size).min(len);
        start..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Slice one page out of `items`
///
/// Never reorders and never returns more than `page_size` items. An empty
/// slice means the page lies beyond the data; listing callers treat that as
/// not-found, search callers as a successful empty page.
pub fn paginate<T>(items: &[T], page: PageRequest, page_size: usize) -> &[T] {
    &items[page.bounds(page_size, items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, PageRequest::first(), 10), &items[0..10]);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, PageRequest::new(3), 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_page_beyond_data_is_empty() {
        let items: Vec<i32> = (1..=25).collect();
        assert!(paginate(&items, PageRequest::new(4), 10).is_empty());
        assert!(paginate(&items, PageRequest::new(1000), 10).is_empty());
    }

    #[test]
    fn test_non_positive_pages_are_empty() {
        let items: Vec<i32> = (1..=25).collect();
        assert!(paginate(&items, PageRequest::new(0), 10).is_empty());
        assert!(paginate(&items, PageRequest::new(-1), 10).is_empty());
        assert!(paginate(&items, PageRequest::new(i64::MIN), 10).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items: Vec<i32> = (1..=3).collect();
        assert!(paginate(&items, PageRequest::new(i64::MAX), 10).is_empty());
    }

    #[test]
    fn test_from_query() {
        assert_eq!(PageRequest::from_query(None), PageRequest::new(1));
        assert_eq!(PageRequest::from_query(Some("3")), PageRequest::new(3));
        assert_eq!(PageRequest::from_query(Some("abc")), PageRequest::new(1));
        assert_eq!(PageRequest::from_query(Some("-2")), PageRequest::new(-2));
    }
}
