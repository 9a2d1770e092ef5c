use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::OrderStatus;

#[derive(Debug, Deserialize, ToSchema, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
    pub sort_order: Option<SortOrder>,
}
