//! Domain layer for the character catalog.
//!
//! This module contains the core domain types of the catalog, independent of the
//! HTTP client, the terminal or the filesystem. It follows domain-driven design
//! principles by keeping business rules isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`result`]: Boundary outcome between the catalog client and the UI logic
//! - [`character`]: Character domain model
//! - [`page`]: Paginated responses and their metadata
//! - [`route`]: Query-style navigation to a character
//!
//! # Examples
//!
//! ```
//! use rickdex::domain::{CharacterPage, Result};
//!
//! fn no_matches() -> Result<CharacterPage> {
//!     Ok(CharacterPage::empty())
//! }
//! ```

pub mod character;
pub mod error;
pub mod page;
pub mod result;
pub mod route;

pub use character::{Character, Gender, LocationRef, Status};
pub use error::{CatalogError, Result};
pub use page::{CharacterPage, PageInfo};
pub use result::{fail, ok, ActionError, ActionResult};
pub use route::CharacterRoute;
