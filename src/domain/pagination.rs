//! Page arithmetic shared by every listing.

/// Articles per page on the index, category and tag listings.
pub const ARTICLES_PER_PAGE: i64 = 6;

/// Articles per page on the archives listing.
pub const ARCHIVE_PER_PAGE: i64 = 30;

/// Highest page number any listing accepts.
///
/// Keeps `(number - 1) * size` within `i64` for every page size in use.
pub const MAX_PAGE: i64 = i64::MAX / ARCHIVE_PER_PAGE;

/// Number of entries in the Atom feed.
pub const FEED_SIZE: i64 = 15;

/// Number of pages needed to show `count` items, `size` per page.
///
/// Ceiling division: an evenly dividing count yields exactly `count / size`
/// pages, anything else one more. A count of zero yields zero pages.
///
/// # Examples
///
/// ```
/// use maple_blog::domain::pagination::page_count;
///
/// assert_eq!(page_count(12, 6), 2);
/// assert_eq!(page_count(13, 6), 3);
/// assert_eq!(page_count(0, 6), 0);
/// ```
pub fn page_count(count: i64, size: i64) -> i64 {
    if count % size == 0 {
        count / size
    } else {
        count / size + 1
    }
}

/// A 1-based page of a listing with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: i64,
    pub size: i64,
}

impl PageRequest {
    /// Creates a page request. `number` is 1-based.
    pub fn new(number: i64, size: i64) -> Self {
        Self { number, size }
    }

    /// Rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.size)
    }

    /// Rows on this page.
    pub fn limit(&self) -> i64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_exact_division() {
        assert_eq!(page_count(12, 6), 2);
        assert_eq!(page_count(60, 30), 2);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(13, 6), 3);
        assert_eq!(page_count(1, 6), 1);
        assert_eq!(page_count(31, 30), 2);
    }

    #[test]
    fn test_page_count_zero() {
        assert_eq!(page_count(0, 6), 0);
        assert_eq!(page_count(0, 30), 0);
    }

    #[test]
    fn test_first_page_offset() {
        let page = PageRequest::new(1, ARTICLES_PER_PAGE);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 6);
    }

    #[test]
    fn test_archive_page_offset() {
        let page = PageRequest::new(3, ARCHIVE_PER_PAGE);
        assert_eq!(page.offset(), 60);
        assert_eq!(page.limit(), 30);
    }

    #[test]
    fn test_offset_of_last_allowed_page() {
        let page = PageRequest::new(MAX_PAGE, ARCHIVE_PER_PAGE);
        assert_eq!(page.offset(), (MAX_PAGE - 1) * ARCHIVE_PER_PAGE);
        assert_eq!(PageRequest::new(i64::MAX, ARCHIVE_PER_PAGE).offset(), i64::MAX);
    }
}
