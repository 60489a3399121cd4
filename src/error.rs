use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single gateway operation.
///
/// Callers treat every variant the same way: the in-flight state update is
/// abandoned and the previously displayed state stays in place.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed (connect, DNS, timeout, body transfer).
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("remote error: HTTP {status}")]
    Remote { status: StatusCode },

    /// The response body did not match the expected payload shape.
    #[error("malformed response: {0}")]
    Malformed(#[source] serde_json::Error),
}
