//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::state::AppState;
use crate::web::dto::health::{CheckStatus, HealthChecks, HealthResponse};

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 42 articles" },
///     "cache": { "status": "ok", "message": "redis backend reachable" },
///     "views": { "status": "ok", "message": "View store reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let cache = check_cache(&state).await;
    let views = check_views(&state).await;

    let all_healthy = database.is_ok() && cache.is_ok() && views.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            cache,
            views,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting articles.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.article_service.total().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {} articles", count)),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();
    if state.cache.health_check().await {
        CheckStatus::ok(format!("{} backend reachable", backend))
    } else {
        CheckStatus::error(format!("{} backend unreachable", backend))
    }
}

async fn check_views(state: &AppState) -> CheckStatus {
    if state.view_counter.health_check().await {
        CheckStatus::ok("View store reachable")
    } else {
        CheckStatus::error("View store unreachable")
    }
}
