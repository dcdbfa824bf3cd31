//! Character domain model.
//!
//! This module defines the [`Character`] record returned by the remote catalog,
//! together with its enumerated status and gender. Characters are immutable once
//! fetched: the catalog only stores and displays them.
//!
//! Field names follow the upstream JSON (`type`, `episode`, ...) so that the
//! same shape round-trips through the favorites slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Life status of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Status {
    /// Upper-cased label used by the status badge.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Alive => "ALIVE",
            Self::Dead => "DEAD",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Gender of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Genderless => "Genderless",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Reference to a location (origin or last known location).
///
/// `url` is empty when the upstream API does not know the location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}

/// A character record as served by the remote catalog.
///
/// # Fields
///
/// - `id`: Unique identifier, the key for favorites and selection
/// - `kind`: Free-text subtype (`type` upstream), often empty
/// - `episode`: Ordered episode locators the character appears in
/// - `created`: Creation timestamp of the upstream record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: Status,
    pub species: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: Gender,
    pub origin: LocationRef,
    pub location: LocationRef,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

impl Character {
    /// Number of episodes the character appears in.
    #[must_use]
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}
