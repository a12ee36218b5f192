use crate::core::denial::DENIAL_PAGE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    // missing token, unset secret and mismatch all end up here
    #[error("invalid or expired token")]
    Unauthorized,
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        match self {
            GateError::Unauthorized => (StatusCode::UNAUTHORIZED, Html(DENIAL_PAGE)).into_response(),
        }
    }
}
