use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("page size must be at least 1 (got {0})")]
    InvalidPageSize(usize),
    #[error("invalid tag {0:?}: tags must be non-empty and contain no whitespace")]
    InvalidTag(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
