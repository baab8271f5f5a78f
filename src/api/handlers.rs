use axum::extract::State;
use axum::response::Json;
use serde::Serialize;
use tonic::Status;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::downstream::CoreClient;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub in_flight_operations: usize,
}

pub async fn health_check<C: CoreClient>(State(state): State<AppState<C>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        in_flight_operations: state.operations.in_flight(),
    })
}

/// Unwrap the resource a successful core response must carry. A missing one
/// is a broken contract on the core side and surfaces as an internal error.
pub(crate) fn required_resource<T>(
    resource: Option<T>,
    operation: &'static str,
    kind: &str,
) -> Result<T, ApiError> {
    resource.ok_or_else(|| {
        log::error!("core response for '{}' carried no {}", operation, kind);
        ApiError::downstream(
            operation,
            Status::internal(format!("core response carried no {}", kind)),
        )
    })
}
