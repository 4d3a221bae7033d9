use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use service::catalog::domain::Violation;
use service::errors::ServiceError;

/// JSON error envelope returned by every endpoint.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
    pub violations: Option<Vec<Violation>>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail, violations: None }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.title });
        if let Some(detail) = self.detail {
            body["detail"] = json!(detail);
        }
        if let Some(violations) = self.violations {
            body["violations"] = json!(violations);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => {
                JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(err.to_string()))
            }
            ServiceError::Validation(violations) => JsonApiError {
                status: StatusCode::BAD_REQUEST,
                title: "Validation Error",
                detail: None,
                violations: Some(violations),
            },
            ServiceError::Db(ref msg) => {
                error!(err = %msg, "storage failure");
                JsonApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    Some(err.to_string()),
                )
            }
        }
    }
}
