use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Request-level failures. Each one maps to a JSON `{"error": ...}` body.
#[derive(thiserror::Error, Debug)]
pub enum BillError {
    #[error("Invalid JSON received")]
    MalformedInput,
    #[error("All fields are required")]
    MissingField,
    #[error("Numeric fields must contain numbers")]
    InvalidNumeric,
    #[error("No data available")]
    NoData,
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl BillError {
    /// Short label used for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MalformedInput => "malformed_input",
            Self::MissingField => "missing_field",
            Self::InvalidNumeric => "invalid_numeric",
            Self::NoData => "no_data",
            Self::Storage(_) => "storage",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for BillError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Storage(e) => {
                tracing::error!(error = %e, "storage operation failed");
                metrics::counter!("bill_storage_errors_total").increment(1);
                "Internal storage error".to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
