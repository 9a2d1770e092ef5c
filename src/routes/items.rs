use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::items::{ItemList, PickItemRequest, PickOutcome, UnpickItemRequest},
    error::AppResult,
    middleware::{auth::AuthPacker, json::JsonBody},
    response::ApiResponse,
    services::pick_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pick", post(pick_item))
        .route("/unpick", post(unpick_item))
        .route("/sku/{sku}", get(search_by_sku))
}

#[utoipa::path(
    post,
    path = "/api/items/pick",
    request_body = PickItemRequest,
    responses(
        (status = 200, description = "Pick applied", body = ApiResponse<PickOutcome>),
        (status = 400, description = "Quantity below 1 or above what remains"),
        (status = 404, description = "Order or item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Items"
)]
pub async fn pick_item(
    State(state): State<AppState>,
    packer: AuthPacker,
    JsonBody(payload): JsonBody<PickItemRequest>,
) -> AppResult<Json<ApiResponse<PickOutcome>>> {
    let resp = pick_service::pick_item(&state, &packer, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/items/unpick",
    request_body = UnpickItemRequest,
    responses(
        (status = 200, description = "Item un-picked"),
        (status = 404, description = "Item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Items"
)]
pub async fn unpick_item(
    State(state): State<AppState>,
    packer: AuthPacker,
    JsonBody(payload): JsonBody<UnpickItemRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let resp = pick_service::unpick_item(&state, &packer, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/items/sku/{sku}",
    params(("sku" = String, Path, description = "Product SKU")),
    responses(
        (status = 200, description = "Line items for the product", body = ApiResponse<ItemList>),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Items"
)]
pub async fn search_by_sku(
    State(state): State<AppState>,
    _packer: AuthPacker,
    Path(sku): Path<String>,
) -> AppResult<Json<ApiResponse<ItemList>>> {
    let resp = pick_service::search_by_sku(&state, &sku).await?;
    Ok(Json(resp))
}
