use std::sync::Arc;

use crate::orders::{OrderService, OrderStore};

/// Gateway shared application state
#[derive(Clone)]
pub struct AppState {
    /// Order listing / creation
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            orders: Arc::new(OrderService::new(store)),
        }
    }
}
