use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operands for the addition endpoint.
///
/// Decoding is strict: both fields are required and any field outside the
/// two operands fails deserialization.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AddRequest {
    pub a: f64,
    pub b: f64,
}

/// The computed sum.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddResponse {
    pub result: f64,
}

/// JSON error envelope returned on validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Liveness probe response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}
