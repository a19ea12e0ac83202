//! The pagination and tag-filter state machine.
//!
//! State is a fixed item list, a set of selected tags and a one-based page
//! number. Filtered counts and page totals are recomputed on every query, so
//! `1 <= current_page <= total_pages` holds after every public call.

use webnovels_model::{Item, PageSize, TagSet};

use crate::config::PagerConfig;
use crate::view::PageView;

/// Outcome of [`PaginationFilterEngine::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Items kept for display.
    pub accepted: usize,
    /// Items dropped because their title was blank.
    pub dropped: usize,
}

/// Owns the article list plus filter and page state.
///
/// Not internally synchronized; hosts that share it across threads wrap it
/// in their own lock.
#[derive(Debug, Clone)]
pub struct PaginationFilterEngine {
    items: Vec<Item>,
    selected_tags: TagSet,
    current_page: usize,
    page_size: PageSize,
}

impl Default for PaginationFilterEngine {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PaginationFilterEngine {
    /// Create an empty engine on page 1 with no filter.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            items: Vec::new(),
            selected_tags: TagSet::new(),
            current_page: 1,
            page_size,
        }
    }

    pub fn from_config(config: &PagerConfig) -> Self {
        Self::new(config.page_size)
    }

    /// Replace the item list, dropping items without a title.
    ///
    /// Clears the filter and returns to page 1.
    pub fn load<I>(&mut self, items: I) -> LoadSummary
    where
        I: IntoIterator<Item = Item>,
    {
        let mut dropped = 0;
        self.items = items
            .into_iter()
            .filter(|item| {
                let keep = item.has_title();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();
        self.selected_tags.clear();
        self.current_page = 1;

        let summary = LoadSummary {
            accepted: self.items.len(),
            dropped,
        };
        if dropped > 0 {
            tracing::warn!(dropped, "Dropped articles without a title");
        }
        tracing::debug!(
            accepted = summary.accepted,
            total_pages = self.total_pages(),
            "Loaded articles"
        );
        summary
    }

    /// Add `tag` to the selection, or remove it if already selected.
    ///
    /// Any string is accepted; a tag nobody carries just matches nothing.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
        self.current_page = 1;
        tracing::debug!(
            tag,
            selected = self.selected_tags.len(),
            filtered = self.filtered_count(),
            "Toggled tag filter"
        );
    }

    /// Drop every selected tag ("all").
    pub fn clear_filter(&mut self) {
        self.selected_tags.clear();
        self.current_page = 1;
        tracing::debug!("Cleared tag filter");
    }

    /// Go to page `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: i64) {
        let total = self.total_pages();
        let clamped = if page < 1 {
            1
        } else {
            usize::try_from(page).map_or(total, |p| p.min(total))
        };
        if usize::try_from(page).ok() != Some(clamped) {
            tracing::debug!(requested = page, page = clamped, "Clamped page request");
        }
        self.current_page = clamped;
    }

    /// Go to the next page. No-op on the last page.
    pub fn next_page(&mut self) {
        if !self.is_last_page() {
            self.current_page += 1;
        }
    }

    /// Go to the previous page. No-op on the first page.
    pub fn prev_page(&mut self) {
        if !self.is_first_page() {
            self.current_page -= 1;
        }
    }

    /// All loaded items, in load order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items matching the current selection, in load order.
    pub fn filtered_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items
            .iter()
            .filter(|item| item.matches_all(&self.selected_tags))
    }

    /// The slice of filtered items shown on the current page.
    pub fn visible_items(&self) -> Vec<&Item> {
        let size = self.page_size.get();
        self.filtered_items()
            .skip((self.current_page - 1) * size)
            .take(size)
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_items().count()
    }

    /// Number of loaded (titled) items, ignoring the filter.
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Page count for the current selection. Never zero.
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size.get()).max(1)
    }

    #[inline]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[inline]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[inline]
    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    pub fn selected_tags(&self) -> &TagSet {
        &self.selected_tags
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    /// True when no tag is selected.
    #[inline]
    pub fn is_all_mode(&self) -> bool {
        self.selected_tags.is_empty()
    }

    /// Everything a renderer needs for the current page, computed once.
    pub fn page_view(&self) -> PageView<'_> {
        let filtered: Vec<&Item> = self.filtered_items().collect();
        let size = self.page_size.get();
        let filtered_count = filtered.len();
        let total_pages = filtered_count.div_ceil(size).max(1);
        let items = filtered
            .into_iter()
            .skip((self.current_page - 1) * size)
            .take(size)
            .collect();

        PageView {
            items,
            current_page: self.current_page,
            total_pages,
            page_size: size,
            filtered_count,
            total_count: self.items.len(),
            is_first_page: self.current_page == 1,
            is_last_page: self.current_page >= total_pages,
            selected_tags: &self.selected_tags,
        }
    }
}
