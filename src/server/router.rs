use crate::core::config::GateConfig;
use crate::core::gate::AccessGate;
use crate::server::handlers::{options_handler, proxy_handler, server_status_handler};
use crate::server::types::AppState;
use crate::utils::constants::{SERVER_REQUEST_BODY_LIMIT, SERVER_REQUEST_TIMEOUT_SECS};
use axum::http::Method;
use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

pub fn build_router(config: &GateConfig) -> Router {
    let state = Arc::new(AppState {
        gate: AccessGate::new(config),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(Duration::from_secs(SERVER_REQUEST_TIMEOUT_SECS));
    let request_body_limit = RequestBodyLimitLayer::new(SERVER_REQUEST_BODY_LIMIT);

    Router::new()
        .route("/", get(server_status_handler))
        .route("/api/proxy", get(proxy_handler).options(options_handler))
        .layer(timeout)
        .layer(cors)
        .layer(request_body_limit)
        .with_state(state)
}
