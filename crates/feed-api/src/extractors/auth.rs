//! Session extractor
//!
//! Identifies the caller from the `member_id` cookie set at OAuth login.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use feed_core::DomainError;

use crate::response::ApiError;

/// Cookie carrying the logged-in member's id
pub const MEMBER_ID_COOKIE: &str = "member_id";

/// Cookie carrying the logged-in member's role
pub const ROLE_COOKIE: &str = "role";

/// Member identified by the session cookie
#[derive(Debug, Clone, Copy)]
pub struct LoggedInMember {
    pub member_id: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for LoggedInMember
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| DomainError::NotLoggedIn)?;

        let member_id = jar
            .get(MEMBER_ID_COOKIE)
            .and_then(|cookie| cookie.value().parse::<i64>().ok())
            .ok_or(DomainError::NotLoggedIn)?;

        Ok(Self { member_id })
    }
}
