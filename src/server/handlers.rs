use crate::core::error::GateError;
use crate::server::types::{AppState, StatusResponse};
use crate::utils::urls::query_param;
use axum::Json;
use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

pub const TOKEN_QUERY_PARAM: &str = "token";

// server status handler, also the root page the denial links back to
pub async fn server_status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running".to_string(),
    })
}

// cors preflights are answered by the layer, this catches bare OPTIONS
pub async fn options_handler() -> StatusCode {
    StatusCode::OK
}

// a query string that doesn't parse just means there is no candidate
pub async fn proxy_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, GateError> {
    let candidate = query_param(query.as_deref(), TOKEN_QUERY_PARAM);

    match state.gate.evaluate(candidate.as_deref()) {
        Ok(target) => {
            tracing::debug!("access granted, redirecting to {}", target);
            Ok((StatusCode::FOUND, [(header::LOCATION, target.as_str())]).into_response())
        }
        Err(e) => {
            tracing::debug!("access denied: {}", e);
            Err(e)
        }
    }
}
