//! `AuthTrainer` extractor — pulls the session token from the cookie,
//! validates it, and injects the caller identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use sideline_core::error::AppError;
use sideline_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Extracted authenticated trainer context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthTrainer(pub RequestContext);

impl AuthTrainer {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthTrainer {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthTrainer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract session token from the cookie jar
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::authentication("No token provided"))?;

        // Decode and validate the token
        let claims = state.token_decoder.decode_session_token(&token)?;

        // The account bound to the token must still exist
        let trainer = state
            .trainer_repo
            .find_by_id(claims.trainer_id())
            .await?
            .ok_or_else(|| AppError::authentication("Invalid token"))?;

        Ok(AuthTrainer(RequestContext::new(
            trainer.id,
            trainer.username,
        )))
    }
}
