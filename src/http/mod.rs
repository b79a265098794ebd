//! HTTP REST adapter
//!
//! Depends only on core/. Provides the search endpoints and maps the
//! core error taxonomy to HTTP status codes.

pub mod handlers;
pub mod middleware;

pub use handlers::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::LibrankError;

impl LibrankError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        if self.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Automatic error conversion for handlers returning `Result`
impl IntoResponse for LibrankError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
