//! Remote character catalog.
//!
//! - `client`: The [`CatalogApi`] port and status classification
//! - `http`: The reqwest-backed [`HttpCatalogClient`]

pub mod client;
pub mod http;

pub use client::{classify_status, CatalogApi, StatusClass};
pub use http::{HttpCatalogClient, DEFAULT_API_BASE_URL};
