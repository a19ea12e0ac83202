//! Filter buttons over the engine.
//!
//! The bar has an "all" button, a "latest" button and one button per topic
//! tag. Topic and "all" activity is read from the engine, so those buttons
//! can never disagree with the filter:
//!
//! - "all" is active exactly when no tag is selected;
//! - clicking "all" clears the selection;
//! - clicking a topic toggles that tag, which switches "all" off, and
//!   deselecting the last topic switches it back on.
//!
//! "latest" never enters the selection. It is a highlight over the full,
//! load-ordered listing: clicking it clears the filter and flips the
//! highlight, and picking a topic or "all" switches it off.

use serde::Serialize;
use webnovels_model::tag_vocabulary;

use crate::config::PagerConfig;
use crate::engine::PaginationFilterEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagButtonKind {
    All,
    Latest,
    Topic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagButton {
    pub tag: String,
    pub kind: TagButtonKind,
    pub active: bool,
}

/// Ordered set of filter buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBar {
    all_tag: String,
    latest_tag: String,
    topics: Vec<String>,
    latest_active: bool,
}

impl TagBar {
    /// Build a bar from the reserved names in `config` and a topic list.
    ///
    /// Topics are sorted and de-duplicated; reserved names are skipped.
    pub fn new<I>(config: &PagerConfig, topics: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut topics: Vec<String> = topics
            .into_iter()
            .filter(|tag| !config.is_reserved(tag))
            .collect();
        topics.sort();
        topics.dedup();

        Self {
            all_tag: config.all_tag.clone(),
            latest_tag: config.latest_tag.clone(),
            topics,
            latest_active: false,
        }
    }

    /// Build a bar with one topic button per tag found on the loaded items.
    pub fn from_engine(config: &PagerConfig, engine: &PaginationFilterEngine) -> Self {
        Self::new(config, tag_vocabulary(engine.items()))
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn kind_of(&self, tag: &str) -> TagButtonKind {
        if tag == self.all_tag {
            TagButtonKind::All
        } else if tag == self.latest_tag {
            TagButtonKind::Latest
        } else {
            TagButtonKind::Topic
        }
    }

    pub fn is_active(&self, engine: &PaginationFilterEngine, tag: &str) -> bool {
        match self.kind_of(tag) {
            TagButtonKind::All => engine.is_all_mode(),
            TagButtonKind::Latest => self.latest_active && engine.is_all_mode(),
            TagButtonKind::Topic => engine.is_tag_selected(tag),
        }
    }

    /// Buttons in display order: all, latest, then topics.
    pub fn buttons(&self, engine: &PaginationFilterEngine) -> Vec<TagButton> {
        [&self.all_tag, &self.latest_tag]
            .into_iter()
            .chain(&self.topics)
            .map(|tag| TagButton {
                tag: tag.clone(),
                kind: self.kind_of(tag),
                active: self.is_active(engine, tag),
            })
            .collect()
    }

    /// Apply a click on the button labelled `tag`.
    pub fn click(&mut self, engine: &mut PaginationFilterEngine, tag: &str) {
        match self.kind_of(tag) {
            TagButtonKind::All => {
                self.latest_active = false;
                engine.clear_filter();
            }
            TagButtonKind::Latest => {
                self.latest_active = !self.latest_active;
                engine.clear_filter();
            }
            TagButtonKind::Topic => {
                self.latest_active = false;
                engine.toggle_tag(tag);
            }
        }
    }
}
