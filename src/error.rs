use thiserror::Error;

/// Failures surfaced by the request helper.
///
/// There are exactly two kinds: the connection never produced a response, or
/// the buffered body was not JSON. The decode variant carries no cause; the
/// underlying parse error is logged at debug level only.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// Connection-level failure: DNS, connection refused, reset mid-flight.
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded as JSON.
    #[error("invalid response")]
    InvalidResponse,
}
