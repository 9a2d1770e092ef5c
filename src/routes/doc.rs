use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        items::{ItemList, PickItemRequest, PickOutcome, UnpickItemRequest},
        orders::{OrderIdRequest, OrderList, OrderReadiness, OrderWithItems},
    },
    models::{ItemStatus, Order, OrderItemView, OrderStatus},
    response::{ApiResponse, Meta},
    routes::{auth, health, items, orders, params},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        orders::list_orders,
        orders::claim_order,
        orders::check_order_status,
        orders::submit_order,
        orders::unassign_order,
        items::pick_item,
        items::unpick_item,
        items::search_by_sku
    ),
    components(
        schemas(
            Order,
            OrderItemView,
            OrderStatus,
            ItemStatus,
            LoginRequest,
            LoginResponse,
            OrderIdRequest,
            OrderList,
            OrderReadiness,
            OrderWithItems,
            PickItemRequest,
            UnpickItemRequest,
            PickOutcome,
            ItemList,
            params::OrderListQuery,
            params::SortOrder,
            Meta,
            ApiResponse<LoginResponse>,
            ApiResponse<OrderList>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderReadiness>,
            ApiResponse<PickOutcome>,
            ApiResponse<ItemList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Packer login"),
        (name = "Orders", description = "Order assignment, status check and submission"),
        (name = "Items", description = "Line item picking and SKU lookup"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
