use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tonic::Status;

use crate::api::respond::{classify, write_json, ErrorResponse};

/// Every way a request can fail. Each variant renders as exactly one
/// [`ErrorResponse`] with one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid input, caught before any downstream call.
    #[error("{summary}: {detail}")]
    Validation { summary: &'static str, detail: String },

    #[error("invalid request body: {0}")]
    MalformedBody(String),

    /// The identity middleware did not run for this route.
    #[error("no resolved identity in request context")]
    AuthContext,

    #[error("{operation}: {} ({:?})", .status.message(), .status.code())]
    Downstream {
        operation: &'static str,
        status: Status,
    },

    #[error("failed to encode response body: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn missing_parameters(names: &[&str]) -> Self {
        Self::Validation {
            summary: "Missing path parameter",
            detail: format!("Missing required path parameters: {}", names.join(", ")),
        }
    }

    pub fn missing_fields(names: &[&str]) -> Self {
        Self::Validation {
            summary: "Required fields missing",
            detail: format!("Missing required fields: {}", names.join(", ")),
        }
    }

    pub fn invalid_choice(field: &str, value: &str, allowed: &[&str]) -> Self {
        Self::Validation {
            summary: "Invalid field value",
            detail: format!(
                "Invalid {} '{}': must be one of {}",
                field,
                value,
                allowed.join(", ")
            ),
        }
    }

    pub fn downstream(operation: &'static str, status: Status) -> Self {
        Self::Downstream { operation, status }
    }

    /// Status code and envelope this error renders as.
    pub fn to_envelope(&self) -> (StatusCode, ErrorResponse) {
        match self {
            Self::Validation { summary, detail } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(summary, detail))
            }
            Self::MalformedBody(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid request body", detail),
            ),
            Self::AuthContext => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    "Identity not resolved",
                    "Request context carries no resolved identity",
                ),
            ),
            Self::Downstream { operation, status } => {
                let classification = classify(status.code());
                let error = if classification.client_safe && !status.message().is_empty() {
                    status.message()
                } else {
                    classification.summary
                };
                (classification.status, ErrorResponse::new(error, operation))
            }
            Self::Serialization(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Internal server error", "Failed to encode response"),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = self.to_envelope();
        write_json(status, &envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_class_passes_message_through() {
        let err = ApiError::downstream(
            "Failed to show database",
            Status::not_found("database not found"),
        );
        let (status, envelope) = err.to_envelope();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            envelope,
            ErrorResponse::new("database not found", "Failed to show database")
        );
    }

    #[test]
    fn test_server_class_hides_message() {
        let err = ApiError::downstream(
            "Failed to list repos",
            Status::internal("pq: relation \"repos\" does not exist"),
        );
        let (status, envelope) = err.to_envelope();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.error, "Internal server error");
        assert!(!envelope.message.contains("pq:"));
    }

    #[test]
    fn test_empty_client_message_uses_summary() {
        let err = ApiError::downstream("Failed to add repo", Status::already_exists(""));
        let (status, envelope) = err.to_envelope();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(envelope.error, "Resource already exists");
    }

    #[test]
    fn test_auth_context_is_server_side() {
        let (status, envelope) = ApiError::AuthContext.to_envelope();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.status, "error");
    }

    #[test]
    fn test_missing_fields_envelope() {
        let (status, envelope) = ApiError::missing_fields(&["password", "host"]).to_envelope();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope.error, "Required fields missing");
        assert_eq!(envelope.message, "Missing required fields: password, host");
    }
}
