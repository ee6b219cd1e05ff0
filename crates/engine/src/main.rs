//! MovieFlix engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movieflix_engine::api;
use movieflix_engine::infrastructure::{self, config::AppConfig};
use movieflix_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary usually runs from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movieflix_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MovieFlix engine");

    let config = AppConfig::from_env().context("invalid configuration")?;

    let movie_repo = infrastructure::connect_movie_repo(&config.store).await?;
    let app = Arc::new(App::new(movie_repo, config.catalog));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(&config.cors_allowed_origins) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_address()))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    if allowed_origins.is_empty() {
        return None;
    }

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(cors.allow_origin(origins))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
