use axum::http::StatusCode;
use sea_orm::ActiveEnum;
use warehouse_packing_api::{
    config::parse_flag,
    error::AppError,
    models::{ItemStatus, OrderStatus},
    services::rules::{
        ORDER_PACKED, apply_pick, ensure_positive_pick, is_fully_packed, pick_action,
        pick_message, readiness, submission_gate, unpick_action,
    },
};

#[test]
fn pick_below_one_is_rejected_whatever_the_item_state() {
    for (qty, packed) in [(5, 0), (5, 4), (1, 1), (0, 0)] {
        for picked in [0, -1, -50] {
            let err = apply_pick(qty, packed, picked).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(err.to_string(), "Quantity cannot be less than 1");
        }
    }
    assert!(ensure_positive_pick(0).is_err());
    assert!(ensure_positive_pick(1).is_ok());
}

#[test]
fn pick_above_remaining_is_rejected() {
    let err = apply_pick(5, 3, 3).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "Quantity cannot be greater than the total items or number of unpicked items"
    );

    assert!(apply_pick(3, 3, 1).is_err(), "completed item has nothing left");
}

#[test]
fn pick_beyond_i32_range_is_rejected_without_overflow() {
    let too_large = i64::from(i32::MAX) + 1;
    assert!(matches!(ensure_positive_pick(too_large), Err(AppError::Validation(_))));
    assert!(matches!(apply_pick(5, 0, 5_000_000_000), Err(AppError::Validation(_))));
    assert!(ensure_positive_pick(i64::from(i32::MAX)).is_ok());
}

#[test]
fn partial_pick_is_picked_and_full_pick_is_completed() {
    assert_eq!(apply_pick(5, 0, 2).unwrap(), (2, ItemStatus::Picked));
    assert_eq!(apply_pick(5, 2, 3).unwrap(), (5, ItemStatus::Completed));
    assert_eq!(apply_pick(5, 0, 5).unwrap(), (5, ItemStatus::Completed));

    assert_eq!(pick_message(ItemStatus::Picked), "Item picked");
    assert_eq!(pick_message(ItemStatus::Completed), "Item completed");
    assert_eq!(ORDER_PACKED, "Order status changed to Packed");
}

#[test]
fn sequence_of_valid_picks_stays_within_bounds() {
    let qty = 7;
    let mut packed = 0;
    for picked in [1, 3, 9, 2, 2, 1] {
        if let Ok((next, _)) = apply_pick(qty, packed, picked) {
            packed = next;
        }
        assert!((0..=qty).contains(&packed));
    }
    assert_eq!(packed, qty);
}

#[test]
fn item_status_follows_quantities() {
    assert_eq!(ItemStatus::from_quantities(3, 0), ItemStatus::Pending);
    assert_eq!(ItemStatus::from_quantities(3, 1), ItemStatus::Picked);
    assert_eq!(ItemStatus::from_quantities(3, 3), ItemStatus::Completed);
    assert_eq!(ItemStatus::Completed.to_value(), "completed");
}

#[test]
fn order_is_fully_packed_only_when_no_item_is_short() {
    // A(qty=5, packed=5), B(qty=3, packed=0)
    assert!(!is_fully_packed([(5, 5), (3, 0)]));
    assert!(!is_fully_packed([(5, 5), (3, 2)]));
    assert!(is_fully_packed([(5, 5), (3, 3)]));
    assert!(is_fully_packed(Vec::<(i32, i32)>::new()));
}

#[test]
fn readiness_codes() {
    let warn = readiness(2);
    assert_eq!(warn.code, "200B");
    assert_eq!(warn.message, "Warning. Not all items have been packed");

    let ready = readiness(0);
    assert_eq!(ready.code, "200A");
    assert_eq!(ready.message, "All good to go!");
}

#[test]
fn submission_gate_is_advisory_unless_enforced() {
    assert!(submission_gate(false, 3).is_ok());
    assert!(submission_gate(true, 0).is_ok());

    let err = submission_gate(true, 1).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn order_status_only_moves_forward() {
    use OrderStatus::*;
    assert!(Pending.can_advance_to(Packed));
    assert!(Pending.can_advance_to(Submitted));
    assert!(Packed.can_advance_to(Submitted));
    assert!(!Packed.can_advance_to(Pending));
    assert!(!Submitted.can_advance_to(Packed));
    assert!(!Submitted.can_advance_to(Submitted));

    assert_eq!(Pending.to_value(), "P");
    assert_eq!(Packed.to_value(), "K");
    assert_eq!(Submitted.to_value(), "S");
}

#[test]
fn event_actions_name_item_and_order() {
    assert_eq!(pick_action(4, 9), "Picked item #4 for order #9");
    assert_eq!(unpick_action(4, 9), "Unpicked item #4 for order #9");
}

#[test]
fn error_taxonomy_maps_to_http_status() {
    assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
    assert_eq!(AppError::Conflict("x".into()).status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(AppError::Unauthorized("x".into()).status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(AppError::Forbidden("x".into()).status_code(), StatusCode::FORBIDDEN);
    assert_eq!(
        AppError::Internal(anyhow::anyhow!("boom")).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn config_flags_parse_common_spellings() {
    assert!(parse_flag("true"));
    assert!(parse_flag(" YES "));
    assert!(parse_flag("1"));
    assert!(!parse_flag("false"));
    assert!(!parse_flag(""));
}
