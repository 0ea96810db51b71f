//! Output types from the layout layer.

use crate::config::PageConfig;
use crate::elements::{ImageSlot, LayoutElement, PositionedElement};

/// The finished layout of one document: pages in creation order plus the
/// image slots the renderer has to fill.
#[derive(Debug, Clone)]
pub struct LaidOutDocument {
    pub config: PageConfig,
    pub pages: Vec<Vec<PositionedElement>>,
    pub images: Vec<ImageSlot>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text drawn on `page`, in emission order.
    pub fn page_text(&self, page: usize) -> Vec<&str> {
        self.pages
            .get(page)
            .map(|elements| {
                elements
                    .iter()
                    .filter_map(|el| match &el.element {
                        LayoutElement::Text(t) => Some(t.content.as_str()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Index of the first page containing a text element equal to `needle`.
    pub fn find_text(&self, needle: &str) -> Option<usize> {
        (0..self.pages.len()).find(|&page| self.page_text(page).iter().any(|t| t.contains(needle)))
    }
}
