use chrono::Utc;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, sea_query::Expr};
use uuid::Uuid;

use crate::{
    dto::orders::OrderWithItems,
    entity::{
        order_items::Column as OrderItemCol,
        orders::{Column as OrderCol, Entity as Orders},
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthPacker,
    models::Order,
    response::{ApiResponse, Meta},
    services::pick_service::find_item_views,
    state::AppState,
};

/// Claims an unassigned order for the calling packer.
///
/// The claim is a single conditional update on `packer_id IS NULL`; of two
/// concurrent claims only one can touch the row; the other sees zero affected
/// rows and gets `Conflict`.
pub async fn claim_order(
    state: &AppState,
    packer: &AuthPacker,
    order_id: Uuid,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let claimed = Orders::update_many()
        .col_expr(OrderCol::PackerId, Expr::value(packer.packer_id))
        .col_expr(OrderCol::UpdatedAt, Expr::value(Utc::now()))
        .filter(OrderCol::Id.eq(order_id))
        .filter(OrderCol::PackerId.is_null())
        .exec(&state.orm)
        .await?;

    if claimed.rows_affected == 0 {
        return Err(claim_refusal(&state.orm, order_id).await?);
    }
    tracing::info!(order_id = %order_id, packer_id = %packer.packer_id, "order claimed");

    let order = Orders::find_by_id(order_id)
        .one(&state.orm)
        .await?
        .map(Order::from)
        .ok_or_else(|| AppError::not_found("Order not found"))?;
    let items = find_item_views(&state.orm, OrderItemCol::OrderId.eq(order_id)).await?;

    Ok(ApiResponse::success(
        "Order assigned",
        OrderWithItems { order, items },
        Some(Meta::empty()),
    ))
}

/// Explains why a claim touched no row: the order is missing or someone holds it.
async fn claim_refusal<C: ConnectionTrait>(conn: &C, order_id: Uuid) -> AppResult<AppError> {
    let found = Orders::find_by_id(order_id)
        .find_also_related(Users)
        .one(conn)
        .await?;

    let refusal = match found {
        None => AppError::not_found("Order not found"),
        Some((_, Some(holder))) => {
            tracing::debug!(order_id = %order_id, holder = %holder.username, "claim refused");
            AppError::Conflict(format!("Order is already assigned to {}", holder.username))
        }
        // Released between the update and this lookup.
        Some((_, None)) => AppError::Conflict("Order is already assigned".into()),
    };
    Ok(refusal)
}

/// Clears the claim on an order whoever holds it. Used by the idle-timeout
/// poller, so no caller identity is required.
pub async fn release_order(state: &AppState, order_id: Uuid) -> AppResult<ApiResponse<()>> {
    let released = Orders::update_many()
        .col_expr(OrderCol::PackerId, Expr::value(Option::<Uuid>::None))
        .col_expr(OrderCol::UpdatedAt, Expr::value(Utc::now()))
        .filter(OrderCol::Id.eq(order_id))
        .exec(&state.orm)
        .await?;

    if released.rows_affected == 0 {
        tracing::debug!(order_id = %order_id, "release of unknown order");
    } else {
        tracing::info!(order_id = %order_id, "order unassigned");
    }

    Ok(ApiResponse::ack("Order has been unassigned"))
}
