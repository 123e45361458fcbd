use reqwest::StatusCode;
use thiserror::Error;

/// Why a request against the posts API failed.
///
/// Callers in the feed treat every variant the same way ("request failed");
/// the distinction only feeds the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid api url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request timed out")]
    Timeout,

    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("api error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Http(err)
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
