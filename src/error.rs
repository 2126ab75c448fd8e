//! Error types for the request-execution engine and the classifier that turns
//! non-success responses into structured failures.

use log::debug;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by [`Client`](crate::Client) operations.
///
/// None of these are retried or recovered from inside the engine; they reach
/// the caller as-is.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Network, connection or timeout failure, or a failure while reading a
    /// response body.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error(transparent)]
    RequestFailed(#[from] RequestFailed),

    /// Request parameters could not be serialized to a JSON object. Raised
    /// before any network I/O.
    #[error("Failed to encode request parameters: {0}")]
    Encoding(#[source] serde_json::Error),

    /// A successful response body did not match the requested result shape.
    #[error("Failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The base URL or a URL assembled from it is unusable.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Writing a downloaded body to its destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the structured failure when the server rejected the request.
    pub fn as_request_failed(&self) -> Option<&RequestFailed> {
        match self {
            Error::RequestFailed(failed) => Some(failed),
            _ => None,
        }
    }

    /// True when the transport gave up waiting on the server.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}

/// A non-success HTTP response, captured with its status and raw body text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Request failed with HTTP {status_code}: {body}")]
pub struct RequestFailed {
    pub status_code: u16,
    pub body: String,
}

impl RequestFailed {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// 4xx
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// 5xx
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

/// Captures a non-success response as [`Error::RequestFailed`].
///
/// The body is read to the end before the response is dropped so the
/// connection is released. A failure while reading the body is reported as
/// [`Error::Transport`] instead.
pub async fn classify(response: reqwest::Response) -> Error {
    let status_code = response.status().as_u16();
    match response.bytes().await {
        Ok(body) => {
            let body = String::from_utf8_lossy(&body).into_owned();
            debug!("Request failed with HTTP {}: {} bytes", status_code, body.len());
            Error::RequestFailed(RequestFailed { status_code, body })
        }
        Err(e) => {
            debug!(
                "Failed to read body of HTTP {} response: {}",
                status_code, e
            );
            Error::Transport(e)
        }
    }
}
