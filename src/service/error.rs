use thiserror::Error;

// Errors of the remote services feeding the fetch controllers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("service answered with status {0}")]
    Status(u16),
    #[error("http call resulted in error: {0}")]
    Http(String),
    #[error("malformed payload: {0}")]
    Decode(String),
    #[error("invalid service url: {0}")]
    Url(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        // request urls carry credentials in their query
        let err = err.without_url();
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Http(err.to_string())
        }
    }
}

impl From<url::ParseError> for ServiceError {
    fn from(err: url::ParseError) -> Self {
        ServiceError::Url(err.to_string())
    }
}
