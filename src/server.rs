//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, the expiry worker and the Axum
//! server lifecycle.

use crate::application::expiry_worker::run_expiry_worker;
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgCarRepository, PgClaimRepository, PgPolicyRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool using the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable within the connect timeout.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Repositories and services
/// - Background expiry worker (unless disabled)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Expiry schedule is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let schedule = config.expiry_schedule()?;

    let pool = Arc::new(pool);
    let state = AppState::from_repositories(
        Arc::new(PgCarRepository::new(pool.clone())),
        Arc::new(PgPolicyRepository::new(pool.clone())),
        Arc::new(PgClaimRepository::new(pool)),
        schedule.offset,
    );

    if config.expiry_check_enabled {
        tokio::spawn(run_expiry_worker(state.expiry_scheduler.clone(), schedule));
        tracing::info!("Expiry worker started");
    } else {
        tracing::info!("Expiry worker disabled");
    }

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
