//! Development reverse proxy for the Folio UI.
//!
//! Forwards every `/api/{path}` request to a local backend and answers with
//! permissive CORS headers, so the UI served by `trunk serve` can talk to a
//! backend on another port.

pub mod proxy;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::time::Duration;

/// Slack on top of the upload limit for multipart framing and form fields.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config) -> std::io::Result<Server> {
    let upstream = web::Data::new(
        proxy::Upstream::new(
            config.backend_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
        .map_err(std::io::Error::other)?,
    );

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // Development only: allow any origin and echo it back so cookies
        // still flow.
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .app_data(web::PayloadConfig::new(
                payloads::MAX_UPLOAD_SIZE + MULTIPART_OVERHEAD,
            ))
            .app_data(upstream.clone())
            .service(proxy::health)
            .service(web::resource("/api/{path:.*}").to(proxy::forward))
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// Backend every `/api` request is forwarded to, without trailing slash
    pub backend_url: String,
    /// Upper bound on a single forwarded request
    pub timeout_secs: u64,
}

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let port = match var("PORT") {
            Ok(port) => port.parse()?,
            Err(_) => 3000,
        };
        let timeout_secs = match var("PROXY_TIMEOUT_SECS") {
            Ok(secs) => secs.parse()?,
            Err(_) => 30,
        };
        let backend_url = var("BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            backend_url,
            timeout_secs,
        })
    }
}
