//! Error response body and error codes
//!
//! Successful responses are the bare resource (an `Order` or a list of them);
//! every failure uses [`ErrorResponse`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::orders::OrderError;

/// JSON body for every non-2xx response produced by the service
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric error code (see `error_codes`)
    #[schema(example = 5001)]
    pub code: i32,
    /// Error name
    #[schema(example = "SERVICE_UNAVAILABLE")]
    pub error: &'static str,
    /// Human-readable cause
    #[schema(example = "Database error: pool timed out while waiting for an open connection")]
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: i32, detail: impl Into<String>) -> Self {
        Self {
            code,
            error: error_codes::name(code),
            detail: detail.into(),
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;

    pub fn name(code: i32) -> &'static str {
        match code {
            SERVICE_UNAVAILABLE => "SERVICE_UNAVAILABLE",
            _ => "INTERNAL_ERROR",
        }
    }
}

impl OrderError {
    pub fn code(&self) -> i32 {
        match self {
            OrderError::Database(_) => error_codes::SERVICE_UNAVAILABLE,
            OrderError::NotPersisted | OrderError::Internal(_) => error_codes::INTERNAL_ERROR,
        }
    }

    /// Every order failure is a server-side failure.
    pub fn http_status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.code(), self.to_string());
        (self.http_status(), Json(body)).into_response()
    }
}
