use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use risk_core::RiskError;
use serde_json::json;

pub mod frontend;
pub mod risks;

pub enum ServiceError {
    SubjectNotFound(String),
    InternalError(String),
}

impl From<RiskError> for ServiceError {
    fn from(err: RiskError) -> Self {
        match err {
            RiskError::InvalidSubject(_) => ServiceError::SubjectNotFound(err.to_string()),
            // The table is process-constant, so an empty table is a server
            // fault rather than a client error.
            RiskError::EmptyTable => ServiceError::InternalError(err.to_string()),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ServiceError::SubjectNotFound(e) => (StatusCode::NOT_FOUND, e),
            ServiceError::InternalError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

/// Catch-all for unmatched paths and methods.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
