//! Order Desk server entry point
//!
//! ```text
//! order_desk [--env dev] [--port 8080]
//! ```

use std::sync::Arc;

use anyhow::Context;

use order_desk::{AppConfig, AppState, Database, PgOrderStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = order_desk::logging::init_logging(&app_config);

    tracing::info!("Starting Order Desk in {} mode", env);

    let db = Database::connect_lazy(&app_config.database)
        .context("Invalid database configuration")?;
    if let Err(e) = db.health_check().await {
        tracing::warn!("Order store not reachable at startup: {}", e);
    }

    let store = Arc::new(PgOrderStore::new(db.pool().clone()));
    let state = Arc::new(AppState::new(store));

    let addr = app_config.bind_addr(get_port_override());
    order_desk::run_server(&addr, state).await
}
