//! Order management
//!
//! PostgreSQL-backed listing and creation of orders.

pub mod error;
pub mod filter;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{OrderError, OrderResult};
pub use filter::{FilterClause, OrderFilter};
pub use models::{CreateOrderRequest, NewOrder, Order, STATUS_PENDING};
pub use repository::PgOrderStore;
pub use service::{OrderService, generate_order_id};
pub use store::OrderStore;
