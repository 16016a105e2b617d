//! lectio HTTP Server Binary
//!
//! This is the main entry point for the timetable REST API server.
//! It initializes the repository, loads configuration and optional seed
//! data, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! ADMIN_TOKENS=dev-admin SEED_FILE=seed.example.toml \
//!   cargo run --bin lectio-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CONFIG_FILE`: Optional TOML configuration file
//! - `ADMIN_TOKENS` / `TEACHER_TOKENS`: Comma-separated bearer tokens
//! - `SEED_FILE`: Optional reference-data seed TOML
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lectio::config::ServerConfig;
use lectio::db;
use lectio::http::{auth::AuthConfig, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting lectio HTTP server");

    let config = ServerConfig::from_env().map_err(anyhow::Error::msg)?;

    // Initialize global repository once and reuse it across the app
    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    if let Some(ref seed_path) = config.seed_file {
        let summary = db::seed::load_seed_file(repository.as_ref(), seed_path)
            .await
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        info!(
            "Seeded {} levels, {} academic years, {} subject assignments",
            summary.levels, summary.academic_years, summary.subject_assignments
        );
    }

    let auth = AuthConfig::from_tokens(&config.auth);
    if auth.is_empty() {
        warn!("No bearer tokens configured; every request will be rejected with 401");
    }

    // Create application state and router
    let state = AppState::new(repository, auth);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
