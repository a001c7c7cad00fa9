//! Member role

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Authority granted to a member account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserAuthority {
    #[default]
    Member,
    Admin,
}

impl UserAuthority {
    /// Parse a role name, ignoring case.
    pub fn from_value(value: &str) -> Result<Self, DomainError> {
        if value.eq_ignore_ascii_case("member") {
            Ok(Self::Member)
        } else if value.eq_ignore_ascii_case("admin") {
            Ok(Self::Admin)
        } else {
            Err(DomainError::ValidationError(format!("unknown role: {value}")))
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "MEMBER",
            Self::Admin => "ADMIN",
        }
    }

    /// Lowercase form carried in the `role` cookie
    #[must_use]
    pub fn as_lowercase(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for UserAuthority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl fmt::Display for UserAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
