mod common;

use axum::http::StatusCode;
use common::{InMemoryStore, send, send_json};

#[tokio::test]
async fn openapi_document_lists_every_resource() {
    let store = InMemoryStore::default();
    let app = store.app();

    let (status, doc) = send_json(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/products",
        "/products/{id}",
        "/products/update/{id}",
        "/cart",
        "/cart/{user_id}",
        "/favorites",
        "/favorites/{user_id}",
        "/orders",
        "/orders/{id}",
        "/orders/{id}/products",
        "/orders/total/{user_id}",
        "/orders/detail/{order_id}",
        "/order_products/{order_id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn metrics_expose_service_counters_after_traffic() {
    let store = InMemoryStore::default();
    let app = store.app();

    send(&app, "GET", "/products", None).await;

    let (status, bytes) = send(&app, "GET", "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);

    let body = String::from_utf8(bytes).unwrap();
    assert!(body.contains("product_service_request_counter"));
    assert!(body.contains("cart_service_request_duration"));
    assert!(body.contains("# EOF"));
}
