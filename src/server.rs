//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, Redis-backed stores and the Axum server lifecycle.

use crate::application::services::{ArticleService, AuthService, CommentService, FeedService};
use crate::config::{Config, PageCacheBackend};
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache, RedisCache};
use crate::infrastructure::persistence::{
    PgArticleRepository, PgCommentRepository, PgSessionRepository, PgTagRepository,
};
use crate::infrastructure::redis_connection;
use crate::infrastructure::views::{NullViewCounter, RedisViewCounter, ViewCounter};
use crate::routes::app_router;
use crate::state::{AppState, WebSettings};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use redis::aio::ConnectionManager;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis connection (view counter and page cache), optional
/// - Page cache backend
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Redis is required by `PAGE_CACHE_BACKEND=redis` but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let redis = connect_redis(&config).await?;

    let view_counter: Arc<dyn ViewCounter> = match &redis {
        Some(conn) => Arc::new(RedisViewCounter::new(conn.clone())),
        None => {
            tracing::warn!("Redis not configured, article views will not be counted");
            Arc::new(NullViewCounter::new())
        }
    };

    let cache = build_cache(&config, redis)?;
    tracing::info!(backend = cache.backend(), "Page cache ready");

    let pool = Arc::new(pool);
    let article_repository = Arc::new(PgArticleRepository::new(pool.clone()));
    let tag_repository = Arc::new(PgTagRepository::new(pool.clone()));
    let comment_repository = Arc::new(PgCommentRepository::new(pool.clone()));
    let session_repository = Arc::new(PgSessionRepository::new(pool.clone()));

    let state = AppState::new(
        Arc::new(ArticleService::new(
            article_repository.clone(),
            tag_repository,
            comment_repository.clone(),
        )),
        Arc::new(FeedService::new(article_repository.clone())),
        Arc::new(CommentService::new(article_repository, comment_repository)),
        Arc::new(AuthService::new(
            session_repository,
            config.session_signing_secret.clone(),
        )),
        cache,
        view_counter,
        WebSettings {
            page_cache_ttl: config.page_cache_ttl_seconds,
            login_url: config.login_url.clone(),
            secure_cookies: config.secure_cookies,
        },
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
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

/// Connects to Redis when configured.
///
/// A failed connection is fatal only when the page cache is pinned to Redis;
/// otherwise the server runs without view counting.
async fn connect_redis(config: &Config) -> Result<Option<ConnectionManager>> {
    let Some(redis_url) = &config.redis_url else {
        return Ok(None);
    };

    match redis_connection::connect(redis_url).await {
        Ok(conn) => {
            tracing::info!("Connected to Redis");
            Ok(Some(conn))
        }
        Err(e) if config.page_cache_backend == PageCacheBackend::Redis => {
            Err(anyhow::anyhow!("Redis is required for the page cache: {}", e))
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Continuing without it.", e);
            Ok(None)
        }
    }
}

fn build_cache(
    config: &Config,
    redis: Option<ConnectionManager>,
) -> Result<Arc<dyn CacheService>> {
    let ttl = config.page_cache_ttl_seconds;
    let memory = || -> Result<Arc<dyn CacheService>> {
        let capacity = NonZeroUsize::new(config.page_cache_capacity)
            .context("PAGE_CACHE_CAPACITY must be at least 1")?;
        Ok(Arc::new(MemoryCache::new(capacity, ttl)))
    };

    match (config.page_cache_backend, redis) {
        (PageCacheBackend::None, _) => Ok(Arc::new(NullCache::new())),
        (PageCacheBackend::Memory, _) => memory(),
        (PageCacheBackend::Redis | PageCacheBackend::Auto, Some(conn)) => {
            Ok(Arc::new(RedisCache::new(conn, ttl)))
        }
        (PageCacheBackend::Redis, None) => {
            anyhow::bail!("PAGE_CACHE_BACKEND=redis but Redis is not available")
        }
        (PageCacheBackend::Auto, None) => memory(),
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
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
