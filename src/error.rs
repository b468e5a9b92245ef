use reqwest::StatusCode;
use thiserror::Error;

/// Error type for MineBans feed requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The operation needs a server API key but the client was built without one.
    #[error("server API key not set")]
    MissingApiKey,

    /// The player name does not match `[A-Za-z0-9_]{2,16}`.
    #[error("invalid player name: {0:?}")]
    InvalidPlayerName(String),

    /// The request URL could not be constructed.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP exchange failed: connect error, timeout, or a body that did
    /// not decode as the expected JSON shape.
    #[error("communication with minebans.com failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

impl ApiError {
    /// True for failures that may succeed on a later attempt. The client
    /// never retries by itself; retry policy belongs to the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::UnexpectedStatus { .. })
    }
}
