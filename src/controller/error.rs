use thiserror::Error;

// Fetch controller errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("controller is not accepting requests: {0}")]
    InvalidState(String),
    #[error("unable to build the fetch runtime: {0}")]
    Runtime(String),
}
