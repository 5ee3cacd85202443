//! OpenAPI document assembly

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "kcalc-add",
        description = "Minimal HTTP microservice exposing a JSON addition endpoint"
    ),
    tags(
        (name = "Calculator", description = "Arithmetic over JSON"),
        (name = "System", description = "Health checks")
    ),
    paths(crate::handlers::add, crate::handlers::healthz),
    components(schemas(
        crate::dtos::AddRequest,
        crate::dtos::AddResponse,
        crate::dtos::ErrorBody,
        crate::dtos::HealthStatus,
    ))
)]
pub struct ApiDoc;
