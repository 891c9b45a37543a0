use axum::{Json, body::Bytes, extract::State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration as CookieDuration;
use serde_json::Value;
use subtle::ConstantTimeEq;
use tracing::{debug, error, info, warn};

use crate::{
    token::{self, TOKEN_TTL_MS},
    web::{
        AppState,
        payload::{is_truthy, parse_json_body},
        responses::{ApiError, Success},
    },
};

pub const SESSION_COOKIE: &str = "auth_token";
pub const SESSION_TTL_SECS: i64 = TOKEN_TTL_MS / 1000;
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

const PASSWORD_NOT_SET: &str = "Server configuration error: password not set";
const SECRET_NOT_SET: &str = "Server configuration error: token secret not set";

/// `POST /api/auth`: exchanges the shared password for a signed session cookie.
pub async fn process_login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<Success>), ApiError> {
    let payload = parse_json_body(&body)
        .map_err(|err| ApiError::unexpected("Authentication failed", err))?;

    let Some(expected_password) = state.app_password() else {
        error!("login attempted but APP_PASSWORD is not configured");
        return Err(ApiError::configuration(PASSWORD_NOT_SET));
    };
    let Some(secret) = state.token_secret() else {
        error!("login attempted but AUTH_TOKEN_SECRET is not configured");
        return Err(ApiError::configuration(SECRET_NOT_SET));
    };

    let supplied = payload.get("password");
    if !is_truthy(supplied) {
        return Err(ApiError::validation("Password is required"));
    }

    if !password_matches(supplied, expected_password) {
        warn!("rejected login with incorrect password");
        return Err(ApiError::authentication("Incorrect password"));
    }

    let session_token = token::issue_token(secret)
        .map_err(|err| ApiError::unexpected("Authentication failed", err))?;

    let mut cookie = Cookie::new(SESSION_COOKIE, session_token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_secure(state.config().secure_cookies());
    cookie.set_max_age(CookieDuration::seconds(SESSION_TTL_SECS));

    info!("issued session token");
    Ok((jar.add(cookie), Success::ok()))
}

/// `POST /api/logout`: drops the cookie on the client. The token itself stays
/// valid until it ages out.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Success>) {
    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.set_http_only(true);
    removal.set_same_site(SameSite::Strict);
    removal.set_secure(state.config().secure_cookies());
    removal.set_max_age(CookieDuration::seconds(0));

    (jar.remove(removal), Success::ok())
}

pub fn has_valid_session(state: &AppState, jar: &CookieJar) -> bool {
    let Some(secret) = state.token_secret() else {
        return false;
    };

    jar.get(SESSION_COOKIE)
        .is_some_and(|cookie| token::verify_token(cookie.value(), secret))
}

/// Gate for the analysis endpoints. Passes everything through when the session
/// requirement is switched off.
pub fn require_session_json(state: &AppState, jar: &CookieJar) -> Result<(), ApiError> {
    if !state.require_session() || has_valid_session(state, jar) {
        return Ok(());
    }

    debug!("rejected request without a valid session cookie");
    Err(ApiError::authentication(SESSION_EXPIRED_MESSAGE))
}

fn password_matches(supplied: Option<&Value>, expected: &str) -> bool {
    match supplied {
        Some(Value::String(password)) => password.as_bytes().ct_eq(expected.as_bytes()).into(),
        _ => false,
    }
}
