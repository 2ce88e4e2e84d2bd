//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::ErrorResponse;
use crate::orders::{CreateOrderRequest, Order};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Desk API",
        version = "1.0.0",
        description = "List orders with optional customer/status filters and create new orders.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::order::list_orders,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            Order,
            CreateOrderRequest,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Order listing and creation"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
