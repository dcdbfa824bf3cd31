//! Two-variant outcome used between the remote catalog client and the UI logic.
//!
//! Every call into [`CatalogApi`](crate::api::CatalogApi) resolves to an
//! [`ActionResult`]: either the value, or an [`ActionError`] carrying a
//! human-readable message that the presentation layer shows verbatim. The
//! upstream HTTP status, when there is one, travels alongside as structured data.
//!
//! # Examples
//!
//! ```
//! use rickdex::domain::result::{fail, ok, ActionResult};
//!
//! fn lookup(found: bool) -> ActionResult<u32> {
//!     if found { ok(1) } else { fail("Failed to fetch character") }
//! }
//!
//! match lookup(false) {
//!     Ok(id) => println!("got {id}"),
//!     Err(err) => assert_eq!(err.message(), "Failed to fetch character"),
//! }
//! ```

use super::error::CatalogError;
use std::fmt;

/// Message used when a failure carries no text of its own.
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Outcome of a catalog action.
pub type ActionResult<T> = Result<T, ActionError>;

/// Normalized failure of a catalog action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionError {
    message: String,
    status: Option<u16>,
}

impl ActionError {
    /// Creates an error with a message and no upstream status.
    ///
    /// A blank message is replaced by [`UNEXPECTED_ERROR`], so every failure
    /// has something to show.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        };
        Self { message, status: None }
    }

    /// Attaches the upstream HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Prefixes the message with the failed operation, e.g.
    /// `"Failed to fetch characters: Not Found"`.
    #[must_use]
    pub fn context(mut self, operation: &str) -> Self {
        self.message = format!("{operation}: {}", self.message);
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ActionError {}

impl From<&str> for ActionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ActionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<CatalogError> for ActionError {
    fn from(err: CatalogError) -> Self {
        let status = err.status();
        let message = match &err {
            CatalogError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Self {
            status,
            ..Self::new(message)
        }
    }
}

/// Wraps a value as a successful outcome.
pub const fn ok<T>(value: T) -> ActionResult<T> {
    Ok(value)
}

/// Wraps an error or message as a failed outcome.
pub fn fail<T>(error: impl Into<ActionError>) -> ActionResult<T> {
    Err(error.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_accepts_plain_messages() {
        let result: ActionResult<()> = fail("boom");
        let err = result.unwrap_err();
        assert_eq!(err.message(), "boom");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn blank_messages_become_generic() {
        let result: ActionResult<()> = fail("");
        assert_eq!(result.unwrap_err().message(), UNEXPECTED_ERROR);

        let err = ActionError::from(CatalogError::Http {
            status: 599,
            message: "  ".to_string(),
        });
        assert_eq!(err.message(), UNEXPECTED_ERROR);
        assert_eq!(err.status(), Some(599));

        let err = ActionError::new("").context("Failed to fetch characters");
        assert_eq!(err.message(), "Failed to fetch characters: Unexpected error");
    }

    #[test]
    fn fail_keeps_http_status_from_catalog_error() {
        let result: ActionResult<()> = fail(CatalogError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        });
        let err = result.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.message(), "Internal Server Error");
    }

    #[test]
    fn context_prefixes_operation() {
        let err = ActionError::new("Not Found")
            .with_status(404)
            .context("Failed to fetch characters");
        assert_eq!(err.to_string(), "Failed to fetch characters: Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn ok_wraps_value() {
        assert_eq!(ok(3), Ok::<_, ActionError>(3));
    }
}
