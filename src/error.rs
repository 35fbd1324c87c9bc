use thiserror::Error;

/// Unified error type for the SDK.
///
/// The variants split caller-input errors (detectable before any network
/// call) from network and protocol errors, so callers can apply distinct
/// handling policy per kind. Nothing is retried or swallowed inside the SDK;
/// every failure propagates to the immediate caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed client configuration (e.g. an API host with no parseable
    /// network location). Fatal to client creation, never retried.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Login rejected by the service. No session is created.
    #[error("Authentication failed: HTTP {status}: {reason}")]
    AuthenticationFailed { status: u16, reason: String },

    /// Token refresh rejected. The stale token stays installed so the next
    /// call attempts refresh again.
    #[error("Token refresh failed: HTTP {status}: {reason}")]
    RefreshFailed { status: u16, reason: String },

    /// Network-level failure (DNS, connection, timeout). Surfaced as-is.
    #[error("Network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status on a data call. `reason` is the status text;
    /// the response body is not inspected on failure.
    #[error("Request failed: HTTP {status}: {reason}")]
    RequestFailed { status: u16, reason: String },

    /// Success status but the response envelope shape is missing. Treated as
    /// a protocol violation.
    #[error("Malformed response: {detail}")]
    MalformedResponse { detail: String },

    /// No document loader matches the file extension. Raised before any
    /// network call is made.
    #[error("Unsupported file type: '{extension}' (file: {file})")]
    UnsupportedFileType { extension: String, file: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn malformed_response(detail: impl Into<String>) -> Self {
        Error::MalformedResponse {
            detail: detail.into(),
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::AuthenticationFailed { status, .. }
            | Error::RefreshFailed { status, .. }
            | Error::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
