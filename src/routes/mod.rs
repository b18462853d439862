//! Routers and the assembled application.

mod api;
mod common;

pub use api::api_routes;
pub use common::{common_routes, common_routes_with_ready};

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: API routes, health/readiness, request tracing and a body size cap.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(server.body_limit_bytes)),
        )
}
