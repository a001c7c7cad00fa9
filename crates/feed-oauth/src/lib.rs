//! # feed-oauth
//!
//! Identity provider adapters implementing `feed_core::IdentityProvider`.

mod google;

pub use google::{GoogleOAuthProvider, OAuthError, GOOGLE_SCOPES};
