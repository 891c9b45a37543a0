use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    modules,
    web::{AppState, auth, landing},
};

const ROBOTS_TXT_BODY: &str = include_str!("../../robots.txt");

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing::landing_page))
        .route("/api/auth", post(auth::process_login))
        .route("/api/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .route("/robots.txt", get(robots_txt))
        .merge(modules::rcfa::router())
        .with_state(state)
}

async fn robots_txt() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        ROBOTS_TXT_BODY,
    )
}

async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        token::{self, TOKEN_TTL_MS},
        web::auth::SESSION_COOKIE,
    };
    use axum::{
        body::Body,
        http::{Request, Response},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const PASSWORD: &str = "demo";
    const SECRET: &str = "router-test-secret";

    fn config() -> AppConfig {
        AppConfig {
            app_password: Some(PASSWORD.to_string()),
            token_secret: Some(SECRET.to_string()),
            app_env: "development".to_string(),
            require_session: true,
            port: 0,
        }
    }

    fn app_with(config: AppConfig) -> Router {
        build_router(AppState::new(config))
    }

    fn app() -> Router {
        app_with(config())
    }

    fn json_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = cookie {
            builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={token}"));
        }
        builder
            .body(Body::from(body.to_string()))
            .expect("build request")
    }

    fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = cookie {
            builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={token}"));
        }
        builder.body(Body::empty()).expect("build request")
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    async fn body_json(response: Response<Body>) -> Value {
        serde_json::from_str(&body_text(response).await).expect("json body")
    }

    fn set_cookie(response: &Response<Body>) -> Option<String> {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    fn cookie_token(set_cookie: &str) -> String {
        let pair = set_cookie.split(';').next().expect("cookie pair");
        pair.strip_prefix(&format!("{SESSION_COOKIE}="))
            .expect("auth_token cookie")
            .to_string()
    }

    fn valid_token() -> String {
        token::issue_token(SECRET).expect("issue token")
    }

    #[tokio::test]
    async fn login_with_correct_password_sets_session_cookie() {
        let response = app()
            .oneshot(json_post("/api/auth", r#"{"password":"demo"}"#, None))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = set_cookie(&response).expect("set-cookie header");
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));
        assert!(token::verify_token(&cookie_token(&cookie), SECRET));

        assert_eq!(body_json(response).await, json!({ "success": true }));
    }

    #[tokio::test]
    async fn login_outside_development_marks_cookie_secure() {
        let response = app_with(AppConfig {
            app_env: "production".to_string(),
            ..config()
        })
        .oneshot(json_post("/api/auth", r#"{"password":"demo"}"#, None))
        .await
        .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).expect("set-cookie").contains("Secure"));
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        for body in [r#"{"password":"nope"}"#, r#"{"password":"demo "}"#, r#"{"password":42}"#] {
            let response = app()
                .oneshot(json_post("/api/auth", body, None))
                .await
                .expect("response");

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{body}");
            assert!(set_cookie(&response).is_none());
            assert_eq!(
                body_json(response).await,
                json!({ "error": "Incorrect password" })
            );
        }
    }

    #[tokio::test]
    async fn login_without_password_is_bad_request() {
        for body in ["{}", r#"{"password":""}"#, r#"{"password":null}"#] {
            let response = app()
                .oneshot(json_post("/api/auth", body, None))
                .await
                .expect("response");

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(
                body_json(response).await,
                json!({ "error": "Password is required" })
            );
        }
    }

    #[tokio::test]
    async fn login_reports_missing_configuration() {
        let response = app_with(AppConfig {
            app_password: None,
            ..config()
        })
        .oneshot(json_post("/api/auth", r#"{"password":"demo"}"#, None))
        .await
        .expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Server configuration error: password not set" })
        );

        let response = app_with(AppConfig {
            token_secret: None,
            ..config()
        })
        .oneshot(json_post("/api/auth", r#"{"password":"demo"}"#, None))
        .await
        .expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Server configuration error: token secret not set" })
        );
    }

    #[tokio::test]
    async fn login_with_malformed_body_is_unexpected_error() {
        let response = app()
            .oneshot(json_post("/api/auth", "{password", None))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Authentication failed");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn login_then_analyze_returns_fixed_report() {
        let app = app();
        let login = app
            .clone()
            .oneshot(json_post("/api/auth", r#"{"password":"demo"}"#, None))
            .await
            .expect("login response");
        assert_eq!(login.status(), StatusCode::OK);
        let token = cookie_token(&set_cookie(&login).expect("set-cookie"));

        let response = app
            .oneshot(json_post(
                "/api/analyze",
                r#"{"equipmentDescription":"Pump","failureDescription":"Seized"}"#,
                Some(&token),
            ))
            .await
            .expect("analyze response");

        assert_eq!(response.status(), StatusCode::OK);
        let report = body_json(response).await;
        assert_eq!(report["followUpQuestions"].as_array().map(Vec::len), Some(6));
        assert_eq!(report["rootCauseContenders"].as_array().map(Vec::len), Some(3));
        assert_eq!(report["actionItems"].as_array().map(Vec::len), Some(5));
        assert_eq!(
            report["rootCauseContenders"][0]["confidence"],
            "definetly not high"
        );
    }

    #[tokio::test]
    async fn analyze_requires_both_fields() {
        let token = valid_token();
        for body in [
            "{}",
            r#"{"equipmentDescription":"Pump"}"#,
            r#"{"failureDescription":"Seized"}"#,
            r#"{"equipmentDescription":"","failureDescription":"Seized"}"#,
        ] {
            let response = app()
                .oneshot(json_post("/api/analyze", body, Some(&token)))
                .await
                .expect("response");

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(
                body_json(response).await,
                json!({ "error": "equipmentDescription and failureDescription are required." })
            );
        }
    }

    #[tokio::test]
    async fn analyze_rejects_malformed_json() {
        let response = app()
            .oneshot(json_post("/api/analyze", "not json", Some(&valid_token())))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Request body must be valid JSON." })
        );
    }

    #[tokio::test]
    async fn analyze_without_session_is_unauthorized() {
        let body = r#"{"equipmentDescription":"Pump","failureDescription":"Seized"}"#;
        let stale = token::issue_token_at(SECRET, chrono::Utc::now().timestamp_millis() - TOKEN_TTL_MS)
            .expect("issue token");
        let forged = token::issue_token("some-other-secret").expect("issue token");

        for cookie in [None, Some(stale.as_str()), Some(forged.as_str()), Some("garbage")] {
            let response = app()
                .oneshot(json_post("/api/analyze", body, cookie))
                .await
                .expect("response");

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{cookie:?}");
            assert_eq!(
                body_json(response).await,
                json!({ "error": "Session expired. Please log in again." })
            );
        }
    }

    #[tokio::test]
    async fn analyze_is_open_when_session_gate_disabled() {
        let response = app_with(AppConfig {
            require_session: false,
            ..config()
        })
        .oneshot(json_post(
            "/api/analyze",
            r#"{"equipmentDescription":"Pump","failureDescription":"Seized"}"#,
            None,
        ))
        .await
        .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn export_returns_text_attachment() {
        let response = app()
            .oneshot(json_post(
                "/api/analyze/export",
                r#"{"equipmentDescription":"Pump","failureDescription":"Seized","model":"X-200"}"#,
                Some(&valid_token()),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .expect("content-disposition");
        assert!(disposition.starts_with(r#"attachment; filename="rcfa-analysis-"#));
        assert!(disposition.ends_with(r#".txt""#));

        let text = body_text(response).await;
        assert!(text.contains("Equipment: Pump\nModel: X-200\n"));
        assert!(text.contains("   Owner: Reliability\n"));
        assert!(text.contains("   Priority: P3\n"));
    }

    #[tokio::test]
    async fn export_applies_same_validation() {
        let response = app()
            .oneshot(json_post("/api/analyze/export", "{}", Some(&valid_token())))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn logout_expires_cookie() {
        let response = app()
            .oneshot(json_post("/api/logout", "", Some(&valid_token())))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = set_cookie(&response).expect("set-cookie header");
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=")));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn landing_shows_login_without_session() {
        let response = app()
            .oneshot(get_request("/", None))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"id="login-form""#));
        assert!(!html.contains(r#"id="rcfa-form""#));
    }

    #[tokio::test]
    async fn landing_flags_stale_cookie() {
        let response = app()
            .oneshot(get_request("/", Some("1.deadbeef")))
            .await
            .expect("response");
        let html = body_text(response).await;
        assert!(html.contains(r#"id="login-form""#));
        assert!(html.contains("Error: Session expired. Please log in again."));
    }

    #[tokio::test]
    async fn landing_shows_form_with_session() {
        let response = app()
            .oneshot(get_request("/", Some(&valid_token())))
            .await
            .expect("response");
        let html = body_text(response).await;
        assert!(html.contains(r#"id="rcfa-form""#));
        assert!(html.contains("Equipment Description (Required Field)"));
    }

    #[tokio::test]
    async fn health_and_robots() {
        let response = app()
            .oneshot(get_request("/healthz", None))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app()
            .oneshot(get_request("/robots.txt", None))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Disallow: /"));
    }
}
