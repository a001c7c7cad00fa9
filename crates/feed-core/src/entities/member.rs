//! Member entity - a registered pet owner

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::UserAuthority;

/// Member account
///
/// Members are never removed; `displayed = false` marks a withdrawn account
/// and hides it from every active lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub animal_name: Option<String>,
    pub role: UserAuthority,
    pub displayed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Whether the account is still active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.displayed
    }

    /// Change the nickname. Blank nicknames are rejected.
    pub fn change_nickname(&mut self, nickname: &str) -> Result<(), DomainError> {
        let nickname = validate_nickname(nickname)?;
        self.nickname = nickname;
        self.touch();
        Ok(())
    }

    pub fn change_profile_image(&mut self, profile_image: Option<String>) {
        self.profile_image = profile_image;
        self.touch();
    }

    pub fn change_animal_name(&mut self, animal_name: Option<String>) {
        self.animal_name = animal_name;
        self.touch();
    }

    /// Withdraw the account (soft delete)
    pub fn hide(&mut self) {
        self.displayed = false;
        self.touch();
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Data needed to register a member; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub role: UserAuthority,
}

impl NewMember {
    /// Build a regular member registration
    pub fn new(
        email: String,
        nickname: &str,
        profile_image: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            email,
            nickname: validate_nickname(nickname)?,
            profile_image,
            role: UserAuthority::Member,
        })
    }

    /// Materialize the stored entity once the id is known
    pub fn into_member(self, id: i64, now: DateTime<Utc>) -> Member {
        Member {
            id,
            email: self.email,
            nickname: self.nickname,
            profile_image: self.profile_image,
            animal_name: None,
            role: self.role,
            displayed: true,
            created_at: now,
            updated_at: now,
        }
    }
}

fn validate_nickname(nickname: &str) -> Result<String, DomainError> {
    let trimmed = nickname.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidNickname);
    }
    Ok(trimmed.to_string())
}
