//! Response translation shared by every resource handler: the JSON writer,
//! the error envelope, and the downstream status classification.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tonic::Code;

use crate::api::error::ApiError;

/// Written when an envelope itself cannot be encoded.
const ENCODE_FAILURE_BODY: &str =
    r#"{"error":"Internal server error","message":"Failed to encode response","status":"error"}"#;

/// Uniform failure envelope for every resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status: "error".to_string(),
        }
    }
}

/// HTTP mapping for one downstream status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: StatusCode,
    /// Substituted for the downstream message when it is not client safe.
    pub summary: &'static str,
    /// Client-input classes whose downstream message may be shown verbatim.
    pub client_safe: bool,
}

/// Total mapping from a gRPC code to an HTTP status.
pub fn classify(code: Code) -> Classification {
    let (status, summary, client_safe) = match code {
        Code::NotFound => (StatusCode::NOT_FOUND, "Resource not found", true),
        Code::AlreadyExists => (StatusCode::CONFLICT, "Resource already exists", true),
        Code::InvalidArgument => (StatusCode::BAD_REQUEST, "Invalid argument", true),
        Code::PermissionDenied => (StatusCode::FORBIDDEN, "Permission denied", true),
        Code::Unauthenticated => (StatusCode::UNAUTHORIZED, "Authentication required", true),
        Code::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "Service unavailable", false),
        Code::Unimplemented => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Operation not available",
            false,
        ),
        Code::DeadlineExceeded => (StatusCode::REQUEST_TIMEOUT, "Request timeout", false),
        Code::ResourceExhausted => (StatusCode::TOO_MANY_REQUESTS, "Too many requests", false),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            false,
        ),
    };
    Classification {
        status,
        summary,
        client_safe,
    }
}

/// Serialize `value` as the JSON body of a `status` response.
pub fn write_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            body,
        )
            .into_response(),
        Err(err) => {
            log::error!("{}", ApiError::Serialization(err));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                ENCODE_FAILURE_BODY,
            )
                .into_response()
        }
    }
}

/// Successful handler result: a JSON body with its status code.
#[derive(Debug)]
pub struct Reply<T> {
    status: StatusCode,
    body: T,
}

impl<T: Serialize> Reply<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        write_json(self.status, &self.body)
    }
}
