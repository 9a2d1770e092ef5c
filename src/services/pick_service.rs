use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
    sea_query::{Expr, IntoCondition, LockType},
};

use crate::{
    dto::items::{ItemList, PickItemRequest, PickOutcome, UnpickItemRequest},
    entity::{
        order_items::{
            ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems,
            Relation as OrderItemRel,
        },
        orders::Entity as Orders,
        products::Column as ProdCol,
    },
    error::{AppError, AppResult},
    events::NewEvent,
    middleware::auth::AuthPacker,
    models::{ItemStatus, OrderItemView},
    response::{ApiResponse, Meta},
    services::{order_service, rules},
    state::AppState,
};

/// Applies a pick delta to one line item and re-derives the order status in
/// the same transaction.
///
/// The order row is locked first so concurrent picks on one order serialize
/// and the last one always sees every other completed item.
pub async fn pick_item(
    state: &AppState,
    packer: &AuthPacker,
    payload: PickItemRequest,
) -> AppResult<ApiResponse<PickOutcome>> {
    let PickItemRequest {
        id,
        order_id,
        qty_picked,
        ip_addr,
    } = payload;
    rules::ensure_positive_pick(qty_picked)?;

    let txn = state.orm.begin().await?;

    Orders::find_by_id(order_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    let item = OrderItems::find_by_id(id)
        .filter(OrderItemCol::OrderId.eq(order_id))
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("Item not found"))?;

    let (qty_packed, status) = rules::apply_pick(item.qty, item.qty_packed, qty_picked)
        .inspect_err(|err| tracing::debug!(item_id = %id, error = %err, "pick refused"))?;

    let mut active: OrderItemActive = item.into();
    active.qty_packed = Set(qty_packed);
    active.status = Set(status);
    active.updated_at = Set(Utc::now().into());
    active.update(&txn).await?;

    let pack_state = order_service::recompute(&txn, order_id).await?;

    txn.commit().await?;

    state.events.record(NewEvent {
        packer_id: packer.packer_id,
        order_id: Some(order_id),
        ip_addr,
        action: rules::pick_action(id, order_id),
    });

    let message = if pack_state.status_changed {
        rules::ORDER_PACKED
    } else {
        rules::pick_message(status)
    };

    Ok(ApiResponse::success(
        message,
        PickOutcome {
            status,
            message: message.to_string(),
        },
        Some(Meta::empty()),
    ))
}

/// Resets `qty_packed` to zero. The order status is not re-derived.
pub async fn unpick_item(
    state: &AppState,
    packer: &AuthPacker,
    payload: UnpickItemRequest,
) -> AppResult<ApiResponse<()>> {
    let UnpickItemRequest {
        id,
        order_id,
        ip_addr,
    } = payload;

    let reset = OrderItems::update_many()
        .col_expr(OrderItemCol::QtyPacked, Expr::value(0))
        .col_expr(OrderItemCol::Status, Expr::value(ItemStatus::Pending))
        .col_expr(OrderItemCol::UpdatedAt, Expr::value(Utc::now()))
        .filter(OrderItemCol::Id.eq(id))
        .filter(OrderItemCol::OrderId.eq(order_id))
        .exec(&state.orm)
        .await?;

    if reset.rows_affected == 0 {
        return Err(AppError::not_found("Item not found"));
    }

    state.events.record(NewEvent {
        packer_id: packer.packer_id,
        order_id: Some(order_id),
        ip_addr,
        action: rules::unpick_action(id, order_id),
    });

    Ok(ApiResponse::ack("Item un-picked"))
}

pub async fn search_by_sku(state: &AppState, sku: &str) -> AppResult<ApiResponse<ItemList>> {
    let items = find_item_views(&state.orm, ProdCol::Sku.eq(sku)).await?;
    if items.is_empty() {
        return Err(AppError::not_found("Product not found"));
    }

    let meta = Meta::with_total(items.len() as i64);
    Ok(ApiResponse::success("Ok", ItemList { items }, Some(meta)))
}

/// Line items joined with their product's name, sku and image.
pub async fn find_item_views<C, F>(conn: &C, condition: F) -> AppResult<Vec<OrderItemView>>
where
    C: ConnectionTrait,
    F: IntoCondition,
{
    let items = OrderItems::find()
        .select_only()
        .column_as(OrderItemCol::Id, "id")
        .column_as(OrderItemCol::OrderId, "order_id")
        .column_as(OrderItemCol::ProductId, "product_id")
        .column_as(OrderItemCol::Qty, "qty")
        .column_as(OrderItemCol::QtyPacked, "qty_packed")
        .column_as(OrderItemCol::Status, "status")
        .join(JoinType::InnerJoin, OrderItemRel::Products.def())
        .column_as(ProdCol::Name, "name")
        .column_as(ProdCol::Sku, "sku")
        .column_as(ProdCol::Image, "image")
        .filter(condition)
        .order_by_asc(OrderItemCol::CreatedAt)
        .into_model::<OrderItemView>()
        .all(conn)
        .await?;
    Ok(items)
}
