//! API error type.

use thiserror::Error;

/// Failure of an API call.
///
/// Non-2xx responses keep the backend's `detail` message (FastAPI
/// convention) as data so the UI can show it verbatim; everything else is a
/// transport-level failure with no user-facing message of its own.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base url '{0}'")]
    InvalidBaseUrl(String),

    #[error("server returned {status}: {}", detail.as_deref().unwrap_or("<no detail>"))]
    Status { status: u16, detail: Option<String> },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The server-supplied error message, when the server sent one.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
