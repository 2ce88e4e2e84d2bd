//! HTTP handlers
//!
//! - [`order`]: GET/POST /orders
//! - [`health`]: GET /health

pub mod health;
pub mod order;

pub use health::{HealthResponse, health_check};
pub use order::{ListOrdersQuery, create_order, list_orders};
