use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{orders::Model as OrderModel, users::Model as UserModel};
pub use crate::entity::{ItemStatus, OrderStatus};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Packer {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub packer_id: Option<Uuid>,
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub date_placed: DateTime<Utc>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Line item joined with the product display data a packer needs on screen.
#[derive(Debug, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct OrderItemView {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub qty: i32,
    pub qty_packed: i32,
    pub status: ItemStatus,
    pub name: String,
    pub sku: String,
    pub image: Option<String>,
}

impl From<UserModel> for Packer {
    fn from(model: UserModel) -> Self {
        Packer {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<OrderModel> for Order {
    fn from(model: OrderModel) -> Self {
        Order {
            id: model.id,
            packer_id: model.packer_id,
            firstname: model.firstname,
            lastname: model.lastname,
            address: model.address,
            suburb: model.suburb,
            state: model.state,
            postcode: model.postcode,
            country: model.country,
            date_placed: model.date_placed.with_timezone(&Utc),
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
