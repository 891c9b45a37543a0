use std::sync::Arc;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn app_password(&self) -> Option<&str> {
        self.config.app_password.as_deref()
    }

    pub fn token_secret(&self) -> Option<&str> {
        self.config.token_secret.as_deref()
    }

    pub fn require_session(&self) -> bool {
        self.config.require_session
    }
}
