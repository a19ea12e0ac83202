//! Read-only page snapshot handed to renderers.

use serde::Serialize;
use webnovels_model::{Item, TagSet};

/// The current page plus the flags needed to draw pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<'a> {
    /// Items on this page, in listing order.
    pub items: Vec<&'a Item>,
    /// One-based page number.
    pub current_page: usize,
    /// Page count for the selection, never zero.
    pub total_pages: usize,
    /// Maximum items per page.
    pub page_size: usize,
    /// Items matching the selection, across all pages.
    pub filtered_count: usize,
    /// Items loaded, ignoring the selection.
    pub total_count: usize,
    /// Disables the "previous" button.
    pub is_first_page: bool,
    /// Disables the "next" button.
    pub is_last_page: bool,
    /// Tags currently filtered on; empty means "all".
    pub selected_tags: &'a TagSet,
}

impl PageView<'_> {
    /// One-based, inclusive positions of this page within the filtered list.
    ///
    /// `None` when the page is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use webnovels_model::{Item, PageSize};
    /// use webnovels_pager::PaginationFilterEngine;
    ///
    /// let mut engine = PaginationFilterEngine::new(PageSize::new(10).unwrap());
    /// engine.load((1..=25).map(|i| Item::new(i.to_string(), format!("Article {i}"), ["ai"])));
    /// engine.set_page(3);
    /// assert_eq!(engine.page_view().item_range(), Some((21, 25)));
    /// ```
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.current_page.saturating_sub(1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any tag is selected.
    pub fn is_filtered(&self) -> bool {
        !self.selected_tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_range_tolerates_page_zero() {
        let item = Item::new("a", "A", ["ai"]);
        let tags = TagSet::new();
        let view = PageView {
            items: vec![&item],
            current_page: 0,
            total_pages: 1,
            page_size: 10,
            filtered_count: 1,
            total_count: 1,
            is_first_page: true,
            is_last_page: true,
            selected_tags: &tags,
        };
        assert_eq!(view.item_range(), Some((1, 1)));
    }
}
