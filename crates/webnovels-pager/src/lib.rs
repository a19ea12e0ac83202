//! Pagination and tag filtering for the webnovels article listing.
//!
//! The engine holds a fixed list of articles, a set of selected tags and a
//! page number, and answers "what is on screen right now". It does no I/O
//! and never fails: bad page numbers are clamped, unknown tags match nothing,
//! untitled articles are dropped at load time.
//!
//! # Example
//!
//! ```
//! use webnovels_model::Item;
//! use webnovels_pager::{PagerConfig, PagerMessage, PaginationFilterEngine, TagBar};
//!
//! let config = PagerConfig::default();
//! let mut engine = PaginationFilterEngine::from_config(&config);
//! engine.load(vec![
//!     Item::from_tag_attr("/a", "First", "ai openai"),
//!     Item::from_tag_attr("/b", "Second", "ai google"),
//! ]);
//!
//! let mut bar = TagBar::from_engine(&config, &engine);
//! bar.click(&mut engine, "openai");
//! assert_eq!(engine.filtered_count(), 1);
//!
//! engine.handle(PagerMessage::PageInput("7".into()));
//! assert_eq!(engine.current_page(), 1);
//! ```
//!
//! # Architecture
//!
//! - `engine.rs` - [`PaginationFilterEngine`], the only owner of filter and page state
//! - `message.rs` - [`PagerMessage`] gestures a renderer forwards to the engine
//! - `view.rs` - [`PageView`] snapshot a renderer draws from
//! - `tag_bar.rs` - [`TagBar`] "all"/"latest"/topic buttons over the engine
//! - `config.rs` - [`PagerConfig`], TOML-backed session settings
//! - `error.rs` - configuration errors

mod config;
mod engine;
mod error;
mod message;
mod tag_bar;
mod view;

pub use config::{ALL_TAG, LATEST_TAG, PagerConfig};
pub use engine::{LoadSummary, PaginationFilterEngine};
pub use error::{PagerError, Result};
pub use message::{PagerMessage, parse_page_input};
pub use tag_bar::{TagBar, TagButton, TagButtonKind};
pub use view::PageView;
