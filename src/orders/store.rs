//! Order store seam
//!
//! The service talks to storage only through [`OrderStore`]. Production uses
//! [`super::repository::PgOrderStore`]; tests use [`mock::MockOrderStore`].

use async_trait::async_trait;

use super::filter::OrderFilter;
use super::models::{NewOrder, Order};

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Orders matching `filter`, most recently created first
    async fn fetch_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, sqlx::Error>;

    /// Insert one row and return it as persisted, or `None` if the store
    /// returned nothing.
    async fn insert_order(&self, order: &NewOrder) -> Result<Option<Order>, sqlx::Error>;

    /// Cheap liveness check
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
