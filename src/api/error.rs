//! API Errors
//!
//! Every request to the backend resolves to `Result<T, ApiError>`.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network fault: the request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
    /// The configured base URL cannot produce a valid endpoint
    #[error("invalid url: {0}")]
    Url(String),
}
