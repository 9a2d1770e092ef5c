use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order lifecycle. Status only moves forward: Pending, Packed, Submitted.
///
/// Stored as single letters. `P` and `K` are the legacy codes; `S` is new,
/// the legacy service reused `P` for submitted orders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "P")]
    Pending,
    #[sea_orm(string_value = "K")]
    Packed,
    #[sea_orm(string_value = "S")]
    Submitted,
}

impl OrderStatus {
    fn rank(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Packed => 1,
            OrderStatus::Submitted => 2,
        }
    }

    /// True when `next` lies strictly ahead of `self`.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        next.rank() > self.rank()
    }
}

/// Pick progress of a single line item, derived from `qty` and `qty_packed`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ItemStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "picked")]
    Picked,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl ItemStatus {
    pub fn from_quantities(qty: i32, qty_packed: i32) -> Self {
        if qty_packed <= 0 {
            ItemStatus::Pending
        } else if qty_packed < qty {
            ItemStatus::Picked
        } else {
            ItemStatus::Completed
        }
    }
}
