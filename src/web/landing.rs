use axum::{
    extract::{Query, State},
    response::Html,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::debug;

use crate::{
    modules::rcfa,
    web::{
        AppState,
        auth::{self, SESSION_COOKIE, SESSION_EXPIRED_MESSAGE},
        render_login_page, render_login_page_with_notice,
    },
};

#[derive(Default, Deserialize)]
pub struct LandingQuery {
    pub status: Option<String>,
}

/// `GET /`: the analysis form for a signed-in visitor, the login screen
/// otherwise.
pub async fn landing_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<LandingQuery>,
) -> Html<String> {
    if !state.require_session() {
        return Html(rcfa::render_analysis_page(false));
    }

    if auth::has_valid_session(&state, &jar) {
        return Html(rcfa::render_analysis_page(true));
    }

    let expired = jar.get(SESSION_COOKIE).is_some()
        || params.status.as_deref() == Some("session_expired");
    if expired {
        debug!("session cookie missing or stale, showing login");
        Html(render_login_page_with_notice(Some(SESSION_EXPIRED_MESSAGE)))
    } else {
        Html(render_login_page())
    }
}
