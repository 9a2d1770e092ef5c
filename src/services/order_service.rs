use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
    sea_query::{Expr, LockType},
};
use uuid::Uuid;

use crate::{
    dto::orders::{OrderList, OrderReadiness},
    entity::{
        order_items::{Column as OrderItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthPacker,
    models::{Order, OrderStatus},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    services::rules,
    state::AppState,
};

/// Result of re-deriving an order's state from its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackState {
    pub fully_packed: bool,
    /// True when this call moved the order from Pending to Packed.
    pub status_changed: bool,
}

/// Rescans every item of the order and marks it Packed once none is short.
///
/// Runs on the caller's connection so it shares the pick transaction. Only a
/// Pending order is advanced; Packed and Submitted orders are left alone.
pub async fn recompute<C: ConnectionTrait>(conn: &C, order_id: Uuid) -> AppResult<PackState> {
    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order_id))
        .all(conn)
        .await?;

    let fully_packed = rules::is_fully_packed(items.iter().map(|i| (i.qty, i.qty_packed)));
    if !fully_packed {
        return Ok(PackState {
            fully_packed,
            status_changed: false,
        });
    }

    let updated = Orders::update_many()
        .col_expr(OrderCol::Status, Expr::value(OrderStatus::Packed))
        .col_expr(OrderCol::UpdatedAt, Expr::value(Utc::now()))
        .filter(OrderCol::Id.eq(order_id))
        .filter(OrderCol::Status.eq(OrderStatus::Pending))
        .exec(conn)
        .await?;

    let status_changed = updated.rows_affected > 0;
    if status_changed {
        tracing::info!(order_id = %order_id, "order packed");
    }
    Ok(PackState {
        fully_packed,
        status_changed,
    })
}

async fn count_unpacked<C: ConnectionTrait>(conn: &C, order_id: Uuid) -> AppResult<u64> {
    let unpacked = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order_id))
        .filter(Expr::col(OrderItemCol::QtyPacked).lt(Expr::col(OrderItemCol::Qty)))
        .count(conn)
        .await?;
    Ok(unpacked)
}

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let mut finder = Orders::find();
    if let Some(status) = query.status {
        finder = finder.filter(OrderCol::Status.eq(status));
    }
    finder = match query.sort_order.unwrap_or(SortOrder::Asc) {
        SortOrder::Asc => finder.order_by_asc(OrderCol::DatePlaced),
        SortOrder::Desc => finder.order_by_desc(OrderCol::DatePlaced),
    };

    let orders: Vec<Order> = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    if orders.is_empty() {
        return Err(AppError::not_found("Order not found"));
    }

    let meta = Meta::with_total(orders.len() as i64);
    Ok(ApiResponse::success("Ok", OrderList { items: orders }, Some(meta)))
}

/// Read-only pre-submission check.
pub async fn check_status(state: &AppState, order_id: Uuid) -> AppResult<ApiResponse<OrderReadiness>> {
    let exists = Orders::find_by_id(order_id).one(&state.orm).await?;
    if exists.is_none() {
        return Err(AppError::not_found("Order not found"));
    }

    let unpacked = count_unpacked(&state.orm, order_id).await?;
    let readiness = rules::readiness(unpacked);
    Ok(ApiResponse::success(
        readiness.message.clone(),
        readiness,
        Some(Meta::empty()),
    ))
}

pub async fn submit_order(
    state: &AppState,
    packer: &AuthPacker,
    order_id: Uuid,
) -> AppResult<ApiResponse<()>> {
    let txn = state.orm.begin().await?;

    let order = Orders::find_by_id(order_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    if !order.status.can_advance_to(OrderStatus::Submitted) {
        txn.commit().await?;
        return Ok(ApiResponse::ack("Order successfully submitted"));
    }

    if state.config.enforce_full_pack_on_submit {
        let unpacked = count_unpacked(&txn, order_id).await?;
        rules::submission_gate(true, unpacked)?;
    }

    let mut active: OrderActive = order.into();
    active.status = Set(OrderStatus::Submitted);
    active.updated_at = Set(Utc::now().into());
    active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(order_id = %order_id, packer_id = %packer.packer_id, "order submitted");

    Ok(ApiResponse::ack("Order successfully submitted"))
}
