mod common;

use axum::http::StatusCode;
use common::{InMemoryStore, send_json};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn duplicate_favorite_is_rejected_without_a_second_row() {
    let store = InMemoryStore::default();
    let product_id = store.seed_product("Lamp", 60.0);
    let user_id = Uuid::new_v4();
    let app = store.app();
    let payload = json!({ "user_id": user_id, "product_id": product_id });

    let (status, body) = send_json(&app, "POST", "/favorites", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product added to favorites");

    let (status, body) = send_json(&app, "POST", "/favorites", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Product is already in favorites");

    assert_eq!(store.favorite_rows().len(), 1);
}

#[tokio::test]
async fn favorites_are_listed_per_user_with_product_details() {
    let store = InMemoryStore::default();
    let lamp = store.seed_product("Lamp", 60.0);
    let rug = store.seed_product("Rug", 80.0);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let app = store.app();

    for (user, product) in [(alice, lamp), (alice, rug), (bob, rug)] {
        send_json(
            &app,
            "POST",
            "/favorites",
            Some(json!({ "user_id": user, "product_id": product })),
        )
        .await;
    }

    let (status, favorites) = send_json(&app, "GET", &format!("/favorites/{alice}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = favorites
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Lamp", "Rug"]);
}

#[tokio::test]
async fn store_failure_on_insert_is_a_500() {
    let store = InMemoryStore::default();
    store.fail_statements();
    let app = store.app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/favorites",
        Some(json!({ "user_id": Uuid::new_v4(), "product_id": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to add product to favorites");
}

#[tokio::test]
async fn malformed_user_id_in_path_is_rejected() {
    let store = InMemoryStore::default();
    let app = store.app();

    let (status, body) = send_json(&app, "GET", "/favorites/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user_id format");
    assert_eq!(store.calls(), 0);
}
