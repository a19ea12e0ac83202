//! Tag labels and loader-side normalization.
//!
//! The pager compares tags case-sensitively and never rewrites them, so
//! everything that turns raw markup into tags lives here, on the loader side
//! of the boundary.

use std::collections::BTreeSet;

use crate::{Item, ModelError};

/// Set of tag labels attached to an item or selected in a filter.
pub type TagSet = BTreeSet<String>;

/// Label every imported article carries when nothing better was detected.
pub const DEFAULT_TAG: &str = "ai";

/// Lowercases and trims a raw label. Returns `None` for blank input.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Checks that `tag` can be used as a button label and a filter key.
pub fn validate_tag(tag: &str) -> Result<&str, ModelError> {
    if tag.is_empty() || tag.chars().any(char::is_whitespace) {
        return Err(ModelError::InvalidTag(tag.to_string()));
    }
    Ok(tag)
}

/// Parses a space-separated `data-tags` attribute into a normalized set.
///
/// # Examples
///
/// ```
/// use webnovels_model::parse_tag_attr;
///
/// let tags = parse_tag_attr("AI  openai ai");
/// assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["ai", "openai"]);
/// ```
pub fn parse_tag_attr(attr: &str) -> TagSet {
    attr.split_whitespace().filter_map(normalize_tag).collect()
}

/// Sorted, de-duplicated tags across `items`, for building filter buttons.
pub fn tag_vocabulary<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Item>,
{
    let all: TagSet = items
        .into_iter()
        .flat_map(|item| item.tags().iter().cloned())
        .collect();
    all.into_iter().collect()
}
