use thiserror::Error;

/// Failures of a single request/response exchange with the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (network failure, CORS, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx response without a decodable error body
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Explicit `error` field sent by the backend, shown verbatim
    #[error("{0}")]
    Backend(String),

    /// Response body was not the JSON shape the contract promises
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Form input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Decode(error.to_string())
    }
}
