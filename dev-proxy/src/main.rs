//! Development proxy for Folio UI development
//!
//! Environment variables can be set directly or loaded from a .env file in
//! the project root. All of them are optional:
//! - IP_ADDRESS: bind address (default 127.0.0.1)
//! - PORT: listen port (default 3000)
//! - BACKEND_URL: backend to forward `/api` to (default http://localhost:8080)
//! - PROXY_TIMEOUT_SECS: per-request timeout (default 30)
//!
//! Usage: cargo run -p dev-proxy

use dev_proxy::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber},
};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Silently ignored when there is no .env file
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info".into()))?;

    let mut config = Config::from_env()?;
    let server = build(&mut config)?;

    info!("Forwarding /api to {}", config.backend_url);
    info!("Proxy listening on http://{}:{}", config.ip, config.port);
    info!(
        "UI: cd ui && API_URL=http://{}:{} trunk serve",
        config.ip, config.port
    );

    server.await?;
    Ok(())
}
