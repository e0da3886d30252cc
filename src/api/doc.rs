use utoipa::OpenApi;

pub const INVENTORY_TAG: &str = "Inventory";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stockroom",
        description = "Read-only JSON view of the inventory dashboard",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = INVENTORY_TAG, description = "Products, categories and statistics"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
