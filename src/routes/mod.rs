//! Routers and the assembled application.

pub mod common;
mod items;

pub use common::common_routes;
pub use items::item_routes;

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// CORS for the single configured origin, credentials allowed. Methods and headers are
/// mirrored from the preflight since wildcards are not permitted alongside credentials.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|_| ConfigError::InvalidOrigin(allowed_origin.to_string()))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Full application: `/api/...` routes, `/openapi.json`, CORS, body limit, and request tracing.
pub fn app(state: AppState, config: &AppConfig) -> Result<Router, ConfigError> {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(item_routes(state));

    Ok(Router::new()
        .nest("/api", api)
        .merge(openapi_routes())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(cors_layer(&config.allowed_origin)?)
        .layer(TraceLayer::new_for_http()))
}
