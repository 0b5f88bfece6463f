//! Page envelope for list results.

use serde::Serialize;

/// One slice of matching records plus the total match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Total matches ignoring pagination
    pub count: u64,
    pub current_page: i64,
    pub page_size: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Create new page
    pub fn new(items: Vec<T>, current_page: i64, page_size: i64, count: u64) -> Self {
        Self {
            count,
            current_page,
            page_size,
            items,
        }
    }

    /// Page with no matches
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert every item, keeping the envelope.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            count: self.count,
            current_page: self.current_page,
            page_size: self.page_size,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let page: Page<u8> = Page::empty();
        assert_eq!(page.count, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_map_keeps_envelope() {
        let page = Page::new(vec![1, 2, 3], 2, 3, 9).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20, 30]);
        assert_eq!(page.count, 9);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.page_size, 3);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Page::new(vec!["a"], 1, 10, 1)).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["items"][0], "a");
    }
}
