use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const PRODUCT_TAG: &str = "Products";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        description = "A CRUD API for product records",
    ),
    modifiers(&SecurityAddon),
    paths(
        crate::api::handlers::products::get_product_by_id,
        crate::api::handlers::products::get_all_products,
        crate::api::handlers::products::get_products_by_colour,
        crate::api::handlers::products::post_product,
        crate::api::handlers::health::health_check,
    ),
    components(
        schemas(
            crate::api::dto::AddProductRequest,
            crate::api::dto::ProductResponse,
            crate::api::dto::ErrorResponse,
            crate::api::dto::HealthCheckResponse,
        )
    ),
    tags(
        (name = PRODUCT_TAG, description = "Product management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}
