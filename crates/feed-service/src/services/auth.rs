//! Authentication service
//!
//! Google OAuth login: members are created on first login and identified by
//! their email afterwards.

use feed_core::traits::OAuthProfile;
use feed_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::LoginResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::member::MemberService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Consent screen URL the login endpoint redirects to
    pub fn authorization_url(&self) -> String {
        self.ctx.identity_provider().authorization_url()
    }

    /// Complete a login from the provider's authorization code.
    ///
    /// Every failure surfaces as `OAuthFailed`; the cause is only logged.
    #[instrument(skip(self, code))]
    pub async fn handle_google_login(&self, code: &str) -> ServiceResult<LoginResponse> {
        match self.login(code).await {
            Ok(login) => Ok(login),
            Err(e) => {
                warn!(error = %e, "Google login failed");
                Err(DomainError::OAuthFailed.into())
            }
        }
    }

    async fn login(&self, code: &str) -> ServiceResult<LoginResponse> {
        let profile = self.ctx.identity_provider().fetch_profile(code).await?;
        let members = MemberService::new(self.ctx);

        if !members.exists_by_email(&profile.email).await? {
            let nickname = display_name(&profile);
            members
                .register(profile.email.clone(), &nickname, profile.picture.clone())
                .await?;
        }

        let member = members.find_by_email(&profile.email).await?;
        info!(member_id = member.id, "Member logged in");

        Ok(LoginResponse {
            member_id: member.id,
            role: member.role.as_lowercase().to_string(),
        })
    }
}

/// Profile name, falling back to the local part of the email
fn display_name(profile: &OAuthProfile) -> String {
    match profile.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => profile
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}
