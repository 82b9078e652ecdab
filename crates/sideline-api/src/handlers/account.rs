//! Account handlers — register, login, check-auth, logout.
//!
//! The session credential travels as an httpOnly cookie; these handlers are
//! the only place the cookie is set or cleared.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;
use validator::Validate;

use sideline_auth::token::SessionToken;
use sideline_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{CheckAuthResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::auth::{AuthTrainer, SESSION_COOKIE};
use crate::state::AppState;

/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<MessageResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let account = state
        .account_service
        .register(&req.username, &req.password)
        .await?;

    let jar = jar.add(session_cookie(&state, account.token));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(MessageResponse {
            message: "Registered and logged in".to_string(),
        }),
    ))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let account = state
        .account_service
        .login(&req.username, &req.password)
        .await?;

    let jar = jar.add(session_cookie(&state, account.token));

    Ok((
        jar,
        Json(MessageResponse {
            message: "Login successful".to_string(),
        }),
    ))
}

/// GET /users/check-auth
pub async fn check_auth(auth: AuthTrainer) -> Json<CheckAuthResponse> {
    Json(CheckAuthResponse {
        username: auth.username.clone(),
    })
}

/// POST /users/logout
///
/// Stateless invalidation: the client discards the cookie; the token itself
/// stays valid until natural expiry.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());

    (
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// Builds the session cookie carrying a freshly issued token.
fn session_cookie(state: &AppState, token: SessionToken) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.auth.cookie_secure)
        .path("/")
        .max_age(Duration::days(state.config.auth.session_ttl_days as i64))
        .build()
}
