pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::any::Any;
use std::sync::Arc;

use anyhow::Context;
use axum::{Router, response::IntoResponse, response::Response, routing::get};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::orders::OrderError;
use state::AppState;

/// Build the HTTP router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Turn a handler panic into the standard 500 error body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let cause = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", cause);
    OrderError::Internal(cause).into_response()
}

/// Start HTTP Gateway server
pub async fn run_server(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::Order;
    use crate::orders::store::mock::MockOrderStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> (Arc<MockOrderStore>, Router) {
        let store = Arc::new(MockOrderStore::new());
        let state = Arc::new(AppState::new(store.clone()));
        (store, build_router(state))
    }

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_order(name: &str, amount: f64) -> Request<Body> {
        let body = serde_json::json!({ "customerName": name, "orderAmount": amount });
        Request::builder()
            .method("POST")
            .uri("/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn create(app: &Router, name: &str, amount: f64) -> Order {
        let res = app.clone().oneshot(post_order(name, amount)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        serde_json::from_value(body_json(res).await).unwrap()
    }

    async fn list(app: &Router, uri: &str) -> Vec<Order> {
        let res = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        serde_json::from_value(body_json(res).await).unwrap()
    }

    #[tokio::test]
    async fn test_create_order_response() {
        let (_store, app) = test_app();
        let res = app.oneshot(post_order("Alice", 42.5)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["customerName"], "Alice");
        assert_eq!(json["orderAmount"], 42.5);
        let id = json["orderId"].as_str().unwrap();
        assert!(id.starts_with("ORD-") && id.len() == 12);
        assert!(json["orderDate"].is_string());
    }

    #[tokio::test]
    async fn test_list_returns_all_newest_first() {
        let (_store, app) = test_app();
        let a = create(&app, "Alice", 1.0).await;
        let b = create(&app, "Bob", 2.0).await;
        let c = create(&app, "Carol", 3.0).await;

        let orders = list(&app, "/orders").await;
        assert_eq!(orders, vec![c, b, a]);
    }

    #[tokio::test]
    async fn test_list_filters() {
        let (_store, app) = test_app();
        create(&app, "Alice Smith", 1.0).await;
        create(&app, "Bob", 2.0).await;
        create(&app, "Malice", 3.0).await;

        let by_name = list(&app, "/orders?customer_name=ALICE").await;
        assert_eq!(by_name.len(), 2);
        assert!(
            by_name
                .iter()
                .all(|o| o.customer_name.to_lowercase().contains("alice"))
        );

        let both = list(&app, "/orders?customer_name=bob&status=Pending").await;
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].customer_name, "Bob");

        let shipped = list(&app, "/orders?status=Shipped").await;
        assert!(shipped.is_empty());

        // Empty filter values are ignored
        let all = list(&app, "/orders?customer_name=&status=").await;
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_store_returns_empty_array() {
        let (_store, app) = test_app();
        let res = app.oneshot(get("/orders")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_store_failure_is_server_error() {
        let (store, app) = test_app();
        store.set_fail(true);

        let res = app.clone().oneshot(get("/orders")).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(res).await;
        assert_eq!(json["code"], 5001);
        assert!(json["detail"].as_str().unwrap().starts_with("Database error"));

        let res = app.oneshot(post_order("Alice", 1.0)).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(res).await["error"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_insert_without_row_is_server_error() {
        let (store, app) = test_app();
        store.set_drop_inserts(true);

        let res = app.oneshot(post_order("Alice", 1.0)).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(res).await;
        assert_eq!(json["code"], 5000);
        assert_eq!(json["detail"], "Failed to create order.");
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let (store, app) = test_app();
        let req = Request::builder()
            .method("POST")
            .uri("/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"customerName":"Alice"}"#))
            .unwrap();

        let res = app.oneshot(req).await.unwrap();
        assert!(res.status().is_client_error());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_health() {
        let (store, app) = test_app();
        let res = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["status"], "ok");

        store.set_fail(true);
        let res = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(res).await["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_openapi_served() {
        let (_store, app) = test_app();
        let res = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["info"]["title"], "Order Desk API");
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        async fn boom() -> &'static str {
            panic!("boom")
        }

        let app: Router = Router::new()
            .route("/boom", axum::routing::get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let res = app.oneshot(get("/boom")).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(res).await;
        assert_eq!(json["code"], 5000);
        assert_eq!(json["detail"], "An unexpected error occurred: boom");
    }
}
