//! Offset pagination for list queries.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

/// A 1-based page request. Out-of-range values are clamped rather than
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }.clamped()
    }

    pub fn clamped(self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> usize {
        let request = self.clamped();
        (request.page - 1).saturating_mul(request.page_size)
    }

    /// Cuts the requested page out of an already ordered list.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Page<T> {
        let request = self.clamped();
        let total = items.len();
        let page_items = items.iter().skip(self.offset()).take(request.page_size).cloned().collect();
        Page {
            items: page_items,
            total,
            total_pages: total.div_ceil(request.page_size),
            page: request.page,
            page_size: request.page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_clamped() {
        assert_eq!(PageRequest::new(0, 0), PageRequest { page: 1, page_size: 1 });
        assert_eq!(PageRequest::new(3, 500).page_size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::default().page_size, 20);
    }

    #[test]
    fn slices_the_requested_page() {
        let items: Vec<u32> = (1..=45).collect();
        let page = PageRequest::new(3, 20).slice(&items);
        assert_eq!(page.items, (41..=45).collect::<Vec<_>>());
        assert_eq!((page.total, page.total_pages, page.page), (45, 3, 3));

        let past_end = PageRequest::new(9, 20).slice(&items);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 45);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let page = PageRequest::default().slice::<u32>(&[]);
        assert_eq!((page.total, page.total_pages), (0, 0));
    }
}
