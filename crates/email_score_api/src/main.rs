//! Email Deliverability Scoring API Server
//!
//! HTTP front end for the scoring engine built with axum and tokio. Each
//! request runs the full per-address pipeline; bulk requests loop over the
//! single-address entry point with per-address fail-safety.

use axum::Router;
use email_score::{ScoringPipeline, ValidationConfig};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api_handler;
mod config;
mod routes;

use config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ScoringPipeline>,
    pub config: Arc<AppConfig>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    init_tracing(&config)?;

    info!("Starting Email Scoring API v{}", env!("CARGO_PKG_VERSION"));

    let validation_config = ValidationConfig {
        assume_mx_for_unknown: config.scoring.assume_mx_for_unknown,
        assume_catch_all_for_unknown: config.scoring.assume_catch_all_for_unknown,
        assume_mailbox_for_unknown: config.scoring.assume_mailbox_for_unknown,
        dns_timeout_ms: config.scoring.dns_timeout_ms,
        dns_attempts: config.scoring.dns_attempts,
    };

    let pipeline = ScoringPipeline::new(validation_config)
        .map_err(|e| format!("Failed to initialize scoring pipeline: {}", e))?;

    let stats = pipeline.stats();
    info!(
        "Pipeline initialized - {} disposable domains, {} role prefixes",
        stats.disposable_domains_count, stats.role_prefixes_count
    );

    let app_state = AppState {
        pipeline: Arc::new(pipeline),
        config: Arc::new(config.clone()),
    };

    let app = create_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);
    info!("Health check available at http://{}/health", addr);
    info!("Single-address API: http://{}/v1/score", addr);
    info!("Bulk API: http://{}/v1/score/batch", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    routes::build_routes(Arc::new(state))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers(tower_http::cors::Any),
        )
        .layer(CompressionLayer::new())
}

/// Load application configuration from defaults, file and environment
fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if std::path::Path::new("Config.toml").exists() {
        figment = figment.merge(Toml::file("Config.toml"));
    }

    // Double underscore separates sections from keys so multi-word keys
    // like EMAIL_SCORE_SERVER__MAX_BATCH_SIZE survive the split.
    figment = figment.merge(Env::prefixed("EMAIL_SCORE_").split("__"));

    let config: AppConfig = figment.extract()?;

    Ok(config)
}

/// Initialize tracing and logging
fn init_tracing(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), config.observability.log_level).into());

    if config.observability.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_reach_nested_multiword_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("EMAIL_SCORE_SERVER__MAX_BATCH_SIZE", "42");
            jail.set_env("EMAIL_SCORE_OBSERVABILITY__JSON_LOGS", "true");
            jail.set_env("EMAIL_SCORE_SCORING__ASSUME_MX_FOR_UNKNOWN", "true");

            let config = load_config().expect("config loads");
            assert_eq!(config.server.max_batch_size, 42);
            assert!(config.observability.json_logs);
            assert!(config.scoring.assume_mx_for_unknown);

            Ok(())
        });
    }

    #[test]
    fn single_word_env_overrides_still_apply() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("EMAIL_SCORE_SERVER__PORT", "8080");

            let config = load_config().expect("config loads");
            assert_eq!(config.server.port, 8080);

            Ok(())
        });
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
