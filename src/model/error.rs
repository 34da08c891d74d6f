use thiserror::Error;

// Model validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Item text must not be empty.")]
    EmptyText,
    #[error("Unknown filter: {0:?}.")]
    UnknownFilter(String),
}
