//! Order Service - business logic for listing and creating orders
//!
//! Handlers stay thin HTTP adapters and delegate here.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::error::{OrderError, OrderResult};
use super::filter::OrderFilter;
use super::models::{NewOrder, ORDER_ID_PREFIX, Order, STATUS_PENDING};
use super::store::OrderStore;

/// Derive the public order id from a random UUID: `ORD-` followed by the
/// upper-cased first hyphen segment (8 hex characters).
pub fn generate_order_id() -> String {
    order_id_from_uuid(Uuid::new_v4())
}

fn order_id_from_uuid(uuid: Uuid) -> String {
    let hyphenated = uuid.hyphenated().to_string();
    let head = hyphenated.split('-').next().unwrap_or_default();
    format!("{}{}", ORDER_ID_PREFIX, head.to_uppercase())
}

pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// List orders, newest first, narrowed by the optional filters.
    pub async fn list_orders(
        &self,
        customer_name: Option<String>,
        status: Option<String>,
    ) -> OrderResult<Vec<Order>> {
        let filter = OrderFilter::new(customer_name, status);
        tracing::debug!(
            customer_name = filter.customer_name(),
            status = filter.status(),
            "List orders"
        );

        let orders = self.store.fetch_orders(&filter).await.map_err(|e| {
            tracing::error!("List orders failed: {}", e);
            OrderError::from(e)
        })?;
        Ok(orders)
    }

    /// Create a `Pending` order and return the row as the store persisted it.
    pub async fn create_order(
        &self,
        customer_name: String,
        order_amount: f64,
    ) -> OrderResult<Order> {
        let new_order = NewOrder {
            order_id: generate_order_id(),
            customer_name,
            order_amount,
            order_date: Utc::now(),
            status: STATUS_PENDING.to_string(),
        };

        let persisted = self.store.insert_order(&new_order).await.map_err(|e| {
            tracing::error!(order_id = %new_order.order_id, "Create order failed: {}", e);
            OrderError::from(e)
        })?;

        match persisted {
            Some(order) => {
                tracing::info!(
                    order_id = %order.order_id,
                    customer_name = %order.customer_name,
                    order_amount = order.order_amount,
                    "Order created"
                );
                Ok(order)
            }
            None => {
                tracing::error!(order_id = %new_order.order_id, "Insert returned no row");
                Err(OrderError::NotPersisted)
            }
        }
    }

    /// Whether the order store is reachable
    pub async fn ping(&self) -> OrderResult<()> {
        self.store.ping().await?;
        Ok(())
    }
}
