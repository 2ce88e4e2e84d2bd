//! Order data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status assigned to every newly created order
pub const STATUS_PENDING: &str = "Pending";

/// Prefix of the public order identifier
pub const ORDER_ID_PREFIX: &str = "ORD-";

/// Persisted order, as read back from the `orders` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = "ORD-1A2B3C4D")]
    pub order_id: String,
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[schema(example = 42.5)]
    pub order_amount: f64,
    pub order_date: DateTime<Utc>,
    #[schema(example = "Pending")]
    pub status: String,
}

/// POST /orders request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[schema(example = 42.5)]
    pub order_amount: f64,
}

/// Row about to be inserted; every column the service assigns itself.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub order_id: String,
    pub customer_name: String,
    pub order_amount: f64,
    pub order_date: DateTime<Utc>,
    pub status: String,
}
