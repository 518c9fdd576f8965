use reqwest::StatusCode;
use thiserror::Error;

/// Everything that may go wrong within a single poll cycle.
///
/// Only missing configuration is fatal to the process, and that is checked
/// before the loop ever starts. All of these are recoverable: the orchestrator
/// reports them and keeps polling.
#[derive(Debug, Error)]
pub enum PracticumError {
    /// The API endpoint could not be reached at all.
    #[error("failed to reach the homework API: {0:#}")]
    Connection(#[source] reqwest::Error),

    /// The API responded with a non-success status code.
    #[error("homework API returned HTTP {status} for `from_date={from_date}`: {body}")]
    HttpStatus {
        status: StatusCode,
        body: String,
        from_date: i64,
    },

    #[error("malformed response: {0}")]
    Schema(#[from] SchemaError),

    /// A status code outside the fixed verdict catalog. Means the API contract
    /// has changed, not that the request should be retried.
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Details of a response-shape violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("wrong type: {0}")]
    WrongType(&'static str),

    #[error("missing fields: {0}")]
    MissingFields(&'static str),
}
