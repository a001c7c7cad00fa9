//! Feed category

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Category a feed is posted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedType {
    /// Food and treats
    Food,
    /// Daily care
    Care,
    /// Hospital and medical
    Medical,
    /// Grooming and bathing
    Grooming,
}

impl FeedType {
    pub const ALL: [Self; 4] = [Self::Food, Self::Care, Self::Medical, Self::Grooming];

    /// Parse a feed type name, ignoring case.
    pub fn from_value(value: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|ft| ft.as_str().eq_ignore_ascii_case(value))
            .ok_or(DomainError::InvalidFeedType)
    }

    /// Stored form, e.g. `FOOD`
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Care => "CARE",
            Self::Medical => "MEDICAL",
            Self::Grooming => "GROOMING",
        }
    }

    /// Form used in API responses, e.g. `food`
    #[must_use]
    pub fn as_lowercase(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Care => "care",
            Self::Medical => "medical",
            Self::Grooming => "grooming",
        }
    }
}

impl FromStr for FeedType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl fmt::Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
