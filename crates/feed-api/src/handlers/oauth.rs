//! Google OAuth handlers
//!
//! The login endpoint redirects to the consent screen; the callback signs the
//! member in with cookies and sends the browser back to the front-end.

use axum::{extract::State, response::Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use feed_core::DomainError;
use feed_service::dto::OAuthCallbackQuery;
use feed_service::AuthService;

use crate::extractors::{ApiQuery, MEMBER_ID_COOKIE, ROLE_COOKIE};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Redirect to Google's consent screen
///
/// GET /oauth/google/login
pub async fn google_login(State(state): State<AppState>) -> Redirect {
    let service = AuthService::new(state.service_context());
    Redirect::temporary(&service.authorization_url())
}

/// Finish the login and hand the session to the front-end
///
/// GET /oauth/google/callback?code
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    query: Result<ApiQuery<OAuthCallbackQuery>, ApiError>,
) -> ApiResult<(CookieJar, Redirect)> {
    let code = query
        .ok()
        .and_then(|ApiQuery(q)| q.code)
        .filter(|code| !code.is_empty())
        .ok_or(DomainError::OAuthFailed)?;

    let service = AuthService::new(state.service_context());
    let login = service.handle_google_login(&code).await?;

    let jar = jar
        .add(session_cookie(MEMBER_ID_COOKIE, login.member_id.to_string()))
        .add(session_cookie(ROLE_COOKIE, login.role));

    Ok((jar, Redirect::temporary(&state.config().google.frontend_url)))
}

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
