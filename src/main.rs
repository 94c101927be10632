use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use flap_core::CoreConfig;
use flap_core::config::usage_log_path_from_env_value;

/// Main entry point for the flap selector service
///
/// Resolves configuration once, then serves the REST API until the process is stopped.
///
/// # Environment Variables
/// - `FLAP_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `FLAP_USAGE_LOG`: Usage log file (default: ".data/usage_log.jsonl")
/// - `FLAP_ADMIN_KEY`: Key required by `GET /usage/export`; export is disabled when unset
///
/// # Errors
/// Returns an error if configuration is invalid, the address cannot be bound, or the server
/// fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flap_run=info".parse()?)
                .add_directive("flap_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("FLAP_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = Arc::new(CoreConfig::new(
        usage_log_path_from_env_value(std::env::var("FLAP_USAGE_LOG").ok()),
        std::env::var("FLAP_ADMIN_KEY").ok(),
    )?);

    tracing::info!("++ Starting flap selector REST on {}", rest_addr);
    tracing::info!("++ Usage log at {}", cfg.usage_log_path().display());
    if cfg.admin_key().is_none() {
        tracing::warn!("FLAP_ADMIN_KEY not set; usage export is disabled");
    }

    let app = api_rest::router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
