use thiserror::*;

use crate::model::{error::ModelError, ItemId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataStoreError {
    #[error("invalid item: {0}")]
    Validation(#[from] ModelError),

    #[error("the item not found {0}")]
    NotFound(ItemId),
}
