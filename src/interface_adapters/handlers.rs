use crate::interface_adapters::http::JsonResponse;
use crate::interface_adapters::protocol::{ApiError, HealthResponse};
use axum::http::StatusCode;

// Liveness probe.
pub async fn healthz() -> JsonResponse<HealthResponse> {
    JsonResponse::ok(HealthResponse { status: "ok" })
}

// Fallback for unknown routes.
pub async fn not_found() -> JsonResponse<ApiError> {
    JsonResponse::new(StatusCode::NOT_FOUND, ApiError::new("not found"))
}

// Fallback for known routes called with an unsupported method.
pub async fn method_not_allowed() -> JsonResponse<ApiError> {
    JsonResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        ApiError::new("method not allowed"),
    )
}
