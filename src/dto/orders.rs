use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Order, OrderItemView};

/// Body of the submit and unassign endpoints.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderIdRequest {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItemView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

/// Pre-submission readiness: `200A` when every item is packed, `200B` otherwise.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct OrderReadiness {
    pub code: String,
    pub message: String,
}
