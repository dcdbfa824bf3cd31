//! Error types for the catalog.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors that cross the boundary between the remote catalog client and the
//! application layer are normalized into [`ActionError`](crate::domain::ActionError)
//! instead; see [`crate::domain::result`].

use thiserror::Error;

/// The main error type for catalog operations.
///
/// This enum consolidates all error conditions that can occur while running the
/// catalog, from storage operations to HTTP failures and configuration issues.
///
/// # Examples
///
/// ```
/// use rickdex::domain::CatalogError;
///
/// fn validate_config() -> Result<(), CatalogError> {
///     Err(CatalogError::Config("ui_page_size must be greater than zero".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to a storage slot fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The upstream API answered with a non-success HTTP status.
    ///
    /// `status` is the structured status code; callers decide on it rather
    /// than on the message text.
    #[error("{message}")]
    Http {
        /// HTTP status code returned by the upstream API.
        status: u16,
        /// Reason phrase or description of the failure.
        message: String,
    },

    /// The request never produced an HTTP response (DNS, TLS, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response body or persisted payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Returns the upstream HTTP status code, if this error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status() {
        let err = CatalogError::Http {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn non_http_errors_have_no_status() {
        assert_eq!(CatalogError::Transport("timed out".into()).status(), None);
        assert_eq!(CatalogError::Storage("denied".into()).status(), None);
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(CatalogError::from(err), CatalogError::Decode(_)));
    }
}
