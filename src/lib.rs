//! Order Desk - order management REST service
//!
//! Lists orders (optionally filtered by customer name and status) and creates
//! new ones, persisting them in PostgreSQL.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration and the `DATABASE_URL` secret
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL connection pool
//! - [`orders`] - order models, filter builder, store, service
//! - [`gateway`] - axum HTTP router and handlers

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use gateway::{build_router, run_server, state::AppState};
pub use orders::{Order, OrderError, OrderFilter, OrderService, OrderStore, PgOrderStore};
