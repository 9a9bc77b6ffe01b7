//! Common routes: health, readiness, version.

use crate::config::{API_TITLE, API_VERSION};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthBody {
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct VersionBody {
    title: &'static str,
    version: &'static str,
}

#[utoipa::path(get, path = "/api/health", tag = "common", responses((status = 200, description = "Service is up", body = HealthBody)))]
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "healthy" })
}

#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "common",
    responses(
        (status = 200, description = "Storage reachable", body = ReadyBody),
        (status = 503, description = "Storage unreachable", body = ReadyBody),
    )
)]
pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = state.store.ping().await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

#[utoipa::path(get, path = "/api/version", tag = "common", responses((status = 200, description = "API title and version", body = VersionBody)))]
pub async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        title: API_TITLE,
        version: API_VERSION,
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
