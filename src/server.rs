//! HTTP server initialization and runtime setup.
//!
//! Opens both stores, spawns the visit worker and runs the Axum server until
//! a shutdown signal arrives.
//!
//! # Lifecycle
//!
//! 1. PostgreSQL pool and Redis connection manager are opened once
//! 2. Migrations are applied
//! 3. The visit worker is spawned with the receiving half of the visit queue
//! 4. The server accepts requests until SIGINT or SIGTERM
//! 5. In-flight requests finish, dropping the last visit sender
//! 6. The worker drains the queue (bounded by [`WORKER_DRAIN_TIMEOUT`])
//! 7. The pool is closed

use crate::application::services::{LinkService, MetricsService};
use crate::config::Config;
use crate::domain::repositories::{LinkRepository, VisitCounter};
use crate::domain::visit_worker::run_visit_worker;
use crate::infrastructure::counter::RedisVisitCounter;
use crate::infrastructure::persistence::PgLinkRepository;
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
use tokio::sync::mpsc;

/// Upper bound on flushing queued visits during shutdown.
pub const WORKER_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database cannot be reached.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Applies embedded migrations from `./migrations`.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    tracing::info!("Migrations applied");
    Ok(())
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database or Redis connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store_timeout = config.store_timeout();

    let pool = connect_database(&config).await?;
    migrate(&pool).await?;

    let counter: Arc<dyn VisitCounter> = Arc::new(
        RedisVisitCounter::connect(&config.redis_url, store_timeout)
            .await
            .context("Failed to connect to Redis")?,
    );

    let (visit_tx, visit_rx) = mpsc::channel(config.visit_queue_capacity);
    let worker = tokio::spawn(run_visit_worker(visit_rx, counter.clone()));
    tracing::info!("Visit worker started");

    let pool = Arc::new(pool);
    let link_repository: Arc<dyn LinkRepository> =
        Arc::new(PgLinkRepository::new(pool.clone(), store_timeout));

    let state = AppState::new(
        Arc::new(LinkService::new(link_repository, visit_tx)),
        Arc::new(MetricsService::new(counter, config.metrics_score_ceiling)),
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, flushing visit queue");
    match tokio::time::timeout(WORKER_DRAIN_TIMEOUT, worker).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("Visit worker failed: {}", e),
        Err(_) => tracing::warn!(
            "Visit queue not drained within {}s, remaining visits are lost",
            WORKER_DRAIN_TIMEOUT.as_secs()
        ),
    }

    pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
