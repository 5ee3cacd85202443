use axum::{body::Bytes, Json};
use tracing::{debug, info};

use crate::dtos::{AddRequest, AddResponse, ErrorBody, HealthStatus};
use crate::error::{ApiError, Result};
use crate::service;

/// Add two numbers
///
/// Accepts a JSON body with exactly the two operands and returns their sum.
#[utoipa::path(
    post,
    path = "/add",
    tag = "Calculator",
    request_body = AddRequest,
    responses(
        (status = 200, description = "Sum of the two operands", body = AddResponse),
        (status = 400, description = "Malformed or extraneous payload", body = ErrorBody),
        (status = 405, description = "Method other than POST", body = String, content_type = "text/plain")
    )
)]
pub async fn add(body: Bytes) -> Result<Json<AddResponse>> {
    // The body is parsed here rather than through the Json extractor so that
    // every failure mode (malformed JSON, missing field, wrong type, unknown
    // field) collapses into the same 400 envelope.
    let req: AddRequest = serde_json::from_slice(&body).map_err(|err| {
        debug!(%err, "rejected add payload");
        ApiError::InvalidPayload
    })?;

    let sum = service::add(req.a, req.b);
    info!(a = req.a, b = req.b, result = sum, "add");

    Ok(Json(AddResponse { result: sum }))
}

/// Fallback for `/add` requests with any method other than POST.
pub async fn add_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Health check
///
/// Liveness probe for load balancers and orchestrators.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
