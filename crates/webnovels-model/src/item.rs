use serde::{Deserialize, Serialize};

use crate::ItemId;
use crate::tags::{TagSet, parse_tag_attr};

/// One article in the listing.
///
/// Fields are private: once an item has been handed to the pager it is
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    #[serde(default)]
    tags: TagSet,
}

impl Item {
    /// Creates an item with tags taken verbatim.
    pub fn new<T, S>(id: impl Into<ItemId>, title: impl Into<String>, tags: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an item from the space-separated `data-tags` form.
    ///
    /// Tags are lowercased and de-duplicated.
    pub fn from_tag_attr(id: impl Into<ItemId>, title: impl Into<String>, attr: &str) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: parse_tag_attr(attr),
        }
    }

    /// Adds `tag` when the item has no tags at all.
    #[must_use]
    pub fn with_default_tag(mut self, tag: &str) -> Self {
        if self.tags.is_empty() {
            self.tags.insert(tag.to_string());
        }
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the title has visible text. Items without one are never listed.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Conjunctive match: every tag in `selection` must be present.
    ///
    /// An empty selection matches everything.
    pub fn matches_all(&self, selection: &TagSet) -> bool {
        selection.iter().all(|tag| self.tags.contains(tag))
    }
}
