//! Logging to the browser console.
//!
//! The filter defaults to [`DEFAULT_FILTER`]; a `UI_LOG` variable set at
//! build time replaces it, e.g. `UI_LOG=ui=trace trunk serve`.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

pub const DEFAULT_FILTER: &str = "error,ui=debug";

/// The build-time filter if it parses, the default otherwise.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the console subscriber. Call once, before rendering.
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        // std::time panics on wasm32-unknown-unknown
        .without_time()
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    let registry = tracing_subscriber::registry()
        .with(env_filter(option_env!("UI_LOG")))
        .with(fmt_layer);
    if let Err(e) = registry.try_init() {
        // A second call keeps the first subscriber
        tracing::warn!("logging already initialized: {e}");
        return;
    }

    tracing::info!(api = crate::utils::api_base_url(), "Folio UI starting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_bad_directives_fall_back_to_the_default() {
        assert_eq!(env_filter(None).to_string(), DEFAULT_FILTER);
        assert_eq!(env_filter(Some("ui=[")).to_string(), DEFAULT_FILTER);
        assert_eq!(env_filter(Some("ui=trace")).to_string(), "ui=trace");
    }
}
