//! Error type for client operations.

use reqwest::StatusCode;
use reqwest::header::{HeaderName, InvalidHeaderValue};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        context: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid value for header {name}: {source}")]
    InvalidHeader {
        name: HeaderName,
        #[source]
        source: InvalidHeaderValue,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider answered, but not with the status the operation expects.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

impl ClientError {
    /// HTTP status of an [`ClientError::UnexpectedStatus`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}
