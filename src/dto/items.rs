use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{ItemStatus, OrderItemView};

#[derive(Debug, Deserialize, ToSchema)]
pub struct PickItemRequest {
    pub id: Uuid,
    pub order_id: Uuid,
    /// Wider than the stored quantity so oversized picks reach validation.
    pub qty_picked: i64,
    pub ip_addr: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UnpickItemRequest {
    pub id: Uuid,
    pub order_id: Uuid,
    pub ip_addr: Option<String>,
}

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct PickOutcome {
    pub status: ItemStatus,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ItemList {
    #[schema(value_type = Vec<OrderItemView>)]
    pub items: Vec<OrderItemView>,
}
