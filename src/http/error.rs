//! Boundary error type.
//!
//! Store failures and injected faults are converted exactly once, here,
//! into an HTTP status plus a structured `{"detail": ...}` body. The spans
//! have already been annotated by the time an `ApiError` leaves a handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Book not found")]
    NotFound(#[from] StoreError),
    #[error("Simulated server error")]
    SimulatedFault,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::SimulatedFault => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
