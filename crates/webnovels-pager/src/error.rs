//! Pager error types.
//!
//! Engine operations never fail; these errors only come out of configuration.

use thiserror::Error;
use webnovels_model::ModelError;

#[derive(Debug, Error)]
pub enum PagerError {
    #[error("failed to parse pager config: {source}")]
    Config {
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize pager config: {source}")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("invalid pager config: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, PagerError>;
