use thiserror::Error;

use crate::controller::ControllerError;
use crate::datastore::DataStoreError;
use crate::service::ServiceError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument: {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("invalid argument for '{0}': {1}")]
    InvalidArgument(&'static str, String),
    #[error("{0}")]
    Store(#[from] DataStoreError),
    #[error("{0}")]
    Fetch(#[from] ControllerError),
    #[error("{0}")]
    Service(#[from] ServiceError),
}
