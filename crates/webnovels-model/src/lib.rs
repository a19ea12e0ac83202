//! Data model for the webnovels article listing.
//!
//! - [`Item`]: one article (id, title, tags), immutable once built
//! - [`PageSize`]: a non-zero page length
//! - [`tags`]: tag normalization helpers used by loaders before handing
//!   items to the pager

pub mod error;
pub mod ids;
pub mod item;
pub mod tags;

pub use error::{ModelError, Result};
pub use ids::{ItemId, PageSize};
pub use item::Item;
pub use tags::{
    DEFAULT_TAG, TagSet, normalize_tag, parse_tag_attr, tag_vocabulary, validate_tag,
};
