//! Errors produced by REST calls.

/// Failure modes of a `StoreApi` call.
///
/// Application-level failures (`status: FAIL`) are not errors here; they come
/// back inside the envelope so callers can show the server's message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, abort).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with an unexpected HTTP status and no usable body.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// REST calls only run in the browser.
    #[error("not available on server")]
    Unavailable,
}
