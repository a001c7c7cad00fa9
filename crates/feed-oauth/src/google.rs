//! Google OAuth 2.0 provider
//!
//! Authorization-code flow: build the consent URL, exchange the code for an
//! access token, then read the user-info document with that token.

use async_trait::async_trait;
use oauth2::basic::BasicClient;
use oauth2::{
    AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet,
    EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use tracing::{instrument, warn};

use feed_common::GoogleOAuthConfig;
use feed_core::traits::{IdentityProvider, OAuthProfile, RepoResult};
use feed_core::DomainError;

/// Scopes requested on the consent screen
pub const GOOGLE_SCOPES: [&str; 3] = ["openid", "email", "profile"];

type GoogleClient = BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Errors raised while talking to Google
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("Invalid OAuth endpoint URL: {0}")]
    InvalidUrl(#[from] oauth2::url::ParseError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),
}

/// Google identity provider
#[derive(Debug, Clone)]
pub struct GoogleOAuthProvider {
    client: GoogleClient,
    /// Client used for token and user-info calls; never follows redirects
    http_client: reqwest::Client,
    userinfo_url: String,
}

impl GoogleOAuthProvider {
    /// Build the provider from configuration
    pub fn new(config: &GoogleOAuthConfig) -> Result<Self, OAuthError> {
        let client = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(config.auth_url.clone())?)
            .set_token_uri(TokenUrl::new(config.token_url.clone())?)
            .set_redirect_uri(RedirectUrl::new(config.redirect_uri.clone())?)
            // Google expects the client credentials in the form body
            .set_auth_type(AuthType::RequestBody);

        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            http_client,
            userinfo_url: config.userinfo_url.clone(),
        })
    }

    async fn exchange_code(&self, code: &str) -> Result<String, OAuthError> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| OAuthError::TokenExchange(e.to_string()))?;

        Ok(token.access_token().secret().clone())
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<OAuthProfile, OAuthError> {
        let profile = self
            .http_client
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<OAuthProfile>()
            .await?;

        Ok(profile)
    }
}

#[async_trait]
impl IdentityProvider for GoogleOAuthProvider {
    fn authorization_url(&self) -> String {
        let (url, _csrf_state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(GOOGLE_SCOPES.iter().map(|s| Scope::new((*s).to_string())))
            .url();

        url.to_string()
    }

    #[instrument(skip(self, code))]
    async fn fetch_profile(&self, code: &str) -> RepoResult<OAuthProfile> {
        let access_token = self.exchange_code(code).await.map_err(|e| {
            warn!(error = %e, "Google token exchange failed");
            DomainError::OAuthFailed
        })?;

        self.fetch_user_info(&access_token).await.map_err(|e| {
            warn!(error = %e, "Google user info request failed");
            DomainError::OAuthFailed
        })
    }
}
