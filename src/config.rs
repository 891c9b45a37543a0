use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_APP_ENV: &str = "development";
const LOCAL_ENVIRONMENTS: [&str; 3] = ["development", "dev", "local"];

/// Process-level settings, read once at startup.
///
/// The login password and signing secret stay optional here: a missing value
/// is reported per request by the login handler rather than refusing to boot.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_password: Option<String>,
    pub token_secret: Option<String>,
    pub app_env: String,
    pub require_session: bool,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let require_session = match non_empty_var("REQUIRE_SESSION") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("REQUIRE_SESSION must be true or false, got {raw:?}"))?,
            None => true,
        };

        Ok(Self {
            app_password: non_empty_var("APP_PASSWORD"),
            token_secret: non_empty_var("AUTH_TOKEN_SECRET"),
            app_env: non_empty_var("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            require_session,
            port,
        })
    }

    /// Cookies carry the `Secure` attribute everywhere except local development.
    pub fn secure_cookies(&self) -> bool {
        let env = self.app_env.trim().to_ascii_lowercase();
        !LOCAL_ENVIRONMENTS.contains(&env.as_str())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
