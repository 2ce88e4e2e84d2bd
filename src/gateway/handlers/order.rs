//! Order handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::super::state::AppState;
use super::super::types::ErrorResponse;
use crate::orders::{CreateOrderRequest, Order, OrderError};

/// Query string of GET /orders
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListOrdersQuery {
    /// Filter by customer name (case-insensitive substring)
    pub customer_name: Option<String>,
    /// Filter by order status (exact match)
    pub status: Option<String>,
}

/// List orders
///
/// GET /orders?customer_name=ali&status=Pending
#[utoipa::path(
    get,
    path = "/orders",
    params(ListOrdersQuery),
    responses(
        (status = 200, description = "Orders, most recently created first", body = [Order]),
        (status = 500, description = "Order store failure", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListOrdersQuery>,
) -> Result<Json<Vec<Order>>, OrderError> {
    let orders = state
        .orders
        .list_orders(params.customer_name, params.status)
        .await?;
    Ok(Json(orders))
}

/// Create an order
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order as persisted", body = Order),
        (status = 500, description = "Order store failure or order not persisted", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<Order>, OrderError> {
    let order = state
        .orders
        .create_order(req.customer_name, req.order_amount)
        .await?;
    Ok(Json(order))
}
