mod config;
mod modules;
mod token;
mod web;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{config::AppConfig, web::AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    if let Err(err) = app_main().await {
        error!(?err, "application error");
        std::process::exit(1);
    }
}

async fn app_main() -> Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;

    if config.app_password.is_none() {
        warn!("APP_PASSWORD is not set; logins will fail with a configuration error");
    }
    if config.token_secret.is_none() {
        warn!("AUTH_TOKEN_SECRET is not set; sessions cannot be issued or verified");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(
        app_env = %config.app_env,
        secure_cookies = config.secure_cookies(),
        require_session = config.require_session,
        "configuration loaded"
    );

    let app = web::router::build_router(AppState::new(config));

    info!(%addr, "listening");
    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
