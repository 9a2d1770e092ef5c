//! Pure transition rules for items and orders. No store access happens here;
//! the services load rows, apply these functions and persist the result.

use crate::{
    dto::orders::OrderReadiness,
    error::{AppError, AppResult},
    models::ItemStatus,
};

pub const ITEM_PICKED: &str = "Item picked";
pub const ITEM_COMPLETED: &str = "Item completed";
pub const ORDER_PACKED: &str = "Order status changed to Packed";

pub const READY_CODE: &str = "200A";
pub const NOT_READY_CODE: &str = "200B";

const PICK_TOO_LARGE: &str =
    "Quantity cannot be greater than the total items or number of unpicked items";

/// Rejects a pick delta below one or beyond any storable quantity. Checked
/// before the item is even loaded.
pub fn ensure_positive_pick(qty_picked: i64) -> AppResult<()> {
    if qty_picked < 1 {
        return Err(AppError::validation("Quantity cannot be less than 1"));
    }
    if qty_picked > i64::from(i32::MAX) {
        return Err(AppError::validation(PICK_TOO_LARGE));
    }
    Ok(())
}

/// Validates `qty_picked` against what is left on the item and returns the new
/// `qty_packed` together with the derived item status.
pub fn apply_pick(qty: i32, qty_packed: i32, qty_picked: i64) -> AppResult<(i32, ItemStatus)> {
    ensure_positive_pick(qty_picked)?;
    let remaining = i64::from(qty) - i64::from(qty_packed);
    if qty_picked > remaining {
        return Err(AppError::validation(PICK_TOO_LARGE));
    }
    let new_packed = qty_packed + qty_picked as i32;
    Ok((new_packed, ItemStatus::from_quantities(qty, new_packed)))
}

pub fn pick_message(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Completed => ITEM_COMPLETED,
        _ => ITEM_PICKED,
    }
}

/// An order is fully packed iff none of its items has `qty_packed < qty`.
pub fn is_fully_packed<I>(items: I) -> bool
where
    I: IntoIterator<Item = (i32, i32)>,
{
    items.into_iter().all(|(qty, qty_packed)| qty_packed >= qty)
}

pub fn readiness(unpacked_items: u64) -> OrderReadiness {
    if unpacked_items > 0 {
        OrderReadiness {
            code: NOT_READY_CODE.to_string(),
            message: "Warning. Not all items have been packed".to_string(),
        }
    } else {
        OrderReadiness {
            code: READY_CODE.to_string(),
            message: "All good to go!".to_string(),
        }
    }
}

pub fn pick_action(item_id: impl std::fmt::Display, order_id: impl std::fmt::Display) -> String {
    format!("Picked item #{item_id} for order #{order_id}")
}

pub fn unpick_action(item_id: impl std::fmt::Display, order_id: impl std::fmt::Display) -> String {
    format!("Unpicked item #{item_id} for order #{order_id}")
}

/// Server-side submission gate. Advisory mode lets any order through; the
/// enforced mode refuses while items remain unpacked.
pub fn submission_gate(enforce_full_pack: bool, unpacked_items: u64) -> AppResult<()> {
    if enforce_full_pack && unpacked_items > 0 {
        return Err(AppError::validation(
            "Order cannot be submitted until all items have been packed",
        ));
    }
    Ok(())
}
