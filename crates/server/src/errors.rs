use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body returned by every API route: `{"error": ..., "detail": ...}`.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self { status, error: error.into(), detail: None }
    }

    pub fn bad_request(error: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, error) }

    pub fn not_found(error: impl Into<String>) -> Self { Self::new(StatusCode::NOT_FOUND, error) }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::BusinessRule(msg) | ServiceError::Authentication(msg) => Self::bad_request(msg),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            other => {
                error!(code = other.code(), error = %other, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
                    .with_detail(format!("code {}", other.code()))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_rule_maps_to_bad_request_with_message() {
        let e = JsonApiError::from(ServiceError::business("Informe um Mês válido."));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.error, "Informe um Mês válido.");
        assert!(e.detail.is_none());
    }

    #[test]
    fn contract_violation_is_not_shown_to_the_user() {
        let e = JsonApiError::from(ServiceError::contract("cannot update a financial entry without id"));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.error, "internal server error");
        assert_eq!(e.detail.as_deref(), Some("code 1500"));
    }

    #[test]
    fn body_omits_status_and_empty_detail() {
        let body = serde_json::to_value(JsonApiError::not_found("x")).unwrap();
        assert_eq!(body, serde_json::json!({"error": "x"}));
    }
}
