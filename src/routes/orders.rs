use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::orders::{OrderIdRequest, OrderList, OrderReadiness, OrderWithItems},
    error::AppResult,
    middleware::{auth::AuthPacker, json::JsonBody},
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::{assignment_service, order_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/submit", post(submit_order))
        .route("/unassign", post(unassign_order))
        .route("/{id}/claim", post(claim_order))
        .route("/{id}/status", get(check_order_status))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(
        ("status" = Option<String>, Query, description = "Filter by status: Pending, Packed, Submitted"),
        ("sort_order" = Option<String>, Query, description = "Sort by date placed: asc, desc")
    ),
    responses(
        (status = 200, description = "All orders", body = ApiResponse<OrderList>),
        (status = 404, description = "No orders found")
    ),
    security(()),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/claim",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order assigned to the caller", body = ApiResponse<OrderWithItems>),
        (status = 400, description = "Order is already assigned"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn claim_order(
    State(state): State<AppState>,
    packer: AuthPacker,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let resp = assignment_service::claim_order(&state, &packer, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/status",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "200A when ready, 200B when items remain", body = ApiResponse<OrderReadiness>),
        (status = 404, description = "Order not found")
    ),
    security(()),
    tag = "Orders"
)]
pub async fn check_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderReadiness>>> {
    let resp = order_service::check_status(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/submit",
    request_body = OrderIdRequest,
    responses(
        (status = 202, description = "Order submitted"),
        (status = 400, description = "Unpacked items remain (enforced mode only)"),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn submit_order(
    State(state): State<AppState>,
    packer: AuthPacker,
    JsonBody(payload): JsonBody<OrderIdRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<()>>)> {
    let resp = order_service::submit_order(&state, &packer, payload.id).await?;
    Ok((StatusCode::ACCEPTED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/api/orders/unassign",
    request_body = OrderIdRequest,
    responses(
        (status = 202, description = "Order unassigned")
    ),
    security(()),
    tag = "Orders"
)]
pub async fn unassign_order(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<OrderIdRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<()>>)> {
    let resp = assignment_service::release_order(&state, payload.id).await?;
    Ok((StatusCode::ACCEPTED, Json(resp)))
}
