//! Error types for the Velasona API client.
//!
//! The HTTP core never panics on failure - every failure state becomes an
//! [`ApiError`] value. Service operations return `Result<T, ApiError>`;
//! callers surface the message and decide whether to retry. The client
//! itself performs no retries and no backoff.

use thiserror::Error;

use crate::session::SessionStoreError;

/// Errors that can occur when talking to the Velasona backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a structured error envelope. The code and
    /// message pass through unchanged.
    #[error("{message}")]
    Api {
        /// Server-defined error code (e.g., `NOT_FOUND`, `UNAUTHORIZED`).
        code: String,
        /// Human-readable message from the server.
        message: String,
        /// Optional structured details (field errors and the like).
        details: Option<serde_json::Value>,
    },

    /// Non-2xx response with no parseable error envelope.
    #[error("{message}")]
    Unexpected {
        /// HTTP status code of the response.
        status: u16,
        /// Fallback message; service modules replace the generic default
        /// with a resource-specific one.
        message: String,
    },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Input rejected client-side before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// Reading or writing the session file failed.
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    /// Local file I/O failed (uploads, invoice downloads).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Taxonomy code for this error.
    ///
    /// Server-defined codes pass through unchanged; transport failures
    /// report `NETWORK_ERROR` and unstructured responses `UNKNOWN_ERROR`.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Api { code, .. } => code,
            Self::Unexpected { .. } => "UNKNOWN_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Session(_) => "SESSION_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Whether the server rejected the request as unauthenticated.
    ///
    /// There is no token refresh: on a 401-shaped error the caller decides
    /// to log in again.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Api { code, .. } => code == "UNAUTHORIZED",
            Self::Unexpected { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// Non-2xx response without a server envelope.
    #[must_use]
    pub fn unexpected(status: u16) -> Self {
        Self::Unexpected {
            status,
            message: format!("request failed with status {status}"),
        }
    }

    /// Replace the generic message of an [`ApiError::Unexpected`] with a
    /// resource-specific default. Server-provided messages are never
    /// overridden.
    #[must_use]
    pub fn with_fallback(self, default: &str) -> Self {
        match self {
            Self::Unexpected { status, .. } => Self::Unexpected {
                status,
                message: default.to_owned(),
            },
            other => other,
        }
    }
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;
