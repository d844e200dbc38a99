//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, session store selection, and the
//! Axum server lifecycle.

use crate::application::services::AuthService;
use crate::config::Config;
use crate::infrastructure::persistence::{PgSaleRecordRepository, PgSettingsRepository};
use crate::infrastructure::session::{InMemorySessionStore, RedisSessionStore, SessionStore};
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

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis session store (or in-memory fallback)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let session_store = build_session_store(&config).await;
    let auth_service = AuthService::new(
        session_store,
        &config.admin_password,
        config.session_signing_secret.clone(),
        config.session_ttl_seconds,
    );

    let pool = Arc::new(pool);
    let state = AppState::new(
        Arc::new(PgSaleRecordRepository::new(pool.clone())),
        Arc::new(PgSettingsRepository::new(pool)),
        auth_service,
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the PostgreSQL pool with the configured limits.
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

async fn build_session_store(config: &Config) -> Arc<dyn SessionStore> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Session store: in-memory");
        return Arc::new(InMemorySessionStore::new());
    };

    match RedisSessionStore::connect(redis_url).await {
        Ok(redis) => {
            tracing::info!("Session store: Redis");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to connect to Redis: {}. Using in-memory session store.",
                e
            );
            Arc::new(InMemorySessionStore::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
