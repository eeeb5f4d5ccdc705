use thiserror::Error;

/// Failures from the remote movie source.
///
/// Only `NotFound` is surfaced to the user as an inline message; transport
/// and decode failures are logged by the session and leave the result list
/// empty without one.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The search yielded no results (OMDb response without a `Search` field).
    #[error("no movie found")]
    NotFound,

    /// Transport-level failure (connect, TLS, body read).
    #[error("request to movie source failed: {0}")]
    Http(#[from] reqwest::Error),

    /// OMDb answered with `Response: "False"` and an error body other than
    /// the no-results case, e.g. an invalid API key.
    #[error("movie source rejected the request: {0}")]
    Api(String),

    /// The response body did not match the expected shape.
    #[error("failed to decode movie source response: {0}")]
    Decode(String),
}
