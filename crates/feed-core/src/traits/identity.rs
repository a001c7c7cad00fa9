//! External identity provider port

use async_trait::async_trait;
use serde::Deserialize;

use super::RepoResult;

/// Profile fields read from the provider's user-info endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OAuthProfile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Consent screen URL the browser is redirected to
    fn authorization_url(&self) -> String;

    /// Exchange an authorization code and fetch the user's profile
    async fn fetch_profile(&self, code: &str) -> RepoResult<OAuthProfile>;
}
