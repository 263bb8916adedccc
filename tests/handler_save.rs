mod common;

use alias_shortener::api::dto::response::{Status, StatusResponse};
use alias_shortener::routes::api_router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::time::Duration;

fn test_server(pool: sqlx::SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(api_router(state, Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn test_save_with_alias() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({
            "url": "https://google.com",
            "alias": "google"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "OK", "alias": "google" })
    );

    assert_eq!(
        common::target_of(&pool, "google").await.as_deref(),
        Some("https://google.com")
    );
}

#[tokio::test]
async fn test_save_generates_alias() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    let body: StatusResponse = response.json();
    assert_eq!(body.status, Status::Ok);

    let alias = body.alias.unwrap();
    assert_eq!(alias.len(), 6);
    assert_eq!(
        common::target_of(&pool, &alias).await.as_deref(),
        Some("https://example.com")
    );
}

#[tokio::test]
async fn test_save_empty_alias_generates_alias() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();
    let body: StatusResponse = response.json();
    assert_eq!(body.alias.map(|a| a.len()), Some(6));
}

#[tokio::test]
async fn test_save_duplicate_alias() {
    let (pool, _dir) = common::test_pool().await;
    common::create_test_binding(&pool, "google", "https://google.com").await;
    let server = test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({
            "url": "https://bing.com",
            "alias": "google"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "alias already exists" })
    );

    assert_eq!(
        common::target_of(&pool, "google").await.as_deref(),
        Some("https://google.com")
    );
}

#[tokio::test]
async fn test_save_missing_url() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "alias": "nourl" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "field URL is a required field" })
    );
}

#[tokio::test]
async fn test_save_invalid_url() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "not a url", "alias": "broken" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "field URL is not a valid URL" })
    );
    assert!(common::target_of(&pool, "broken").await.is_none());
}

#[tokio::test]
async fn test_save_invalid_alias() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://example.com", "alias": "has space" }))
        .await;

    response.assert_status_bad_request();
    let body: StatusResponse = response.json();
    assert_eq!(body.error.as_deref(), Some("field Alias is not valid"));
}

#[tokio::test]
async fn test_save_malformed_json() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .text("{\"url\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "failed to decode request" })
    );
}

#[tokio::test]
async fn test_save_storage_failure() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool.clone());
    pool.close().await;

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://example.com", "alias": "late" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "failed to add url" })
    );
}

#[tokio::test]
async fn test_save_requires_auth() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://google.com", "alias": "google" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("www-authenticate"));
    assert!(common::target_of(&pool, "google").await.is_none());
}

#[tokio::test]
async fn test_save_wrong_credentials() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::WRONG_AUTH)
        .json(&json!({ "url": "https://google.com", "alias": "google" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "unauthorized" })
    );
    assert!(common::target_of(&pool, "google").await.is_none());
}

#[tokio::test]
async fn test_save_reserved_alias() {
    let (pool, _dir) = common::test_pool().await;
    let server = test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://example.com", "alias": "url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "field Alias is reserved" })
    );
    assert!(common::target_of(&pool, "url").await.is_none());
}

#[tokio::test]
async fn test_save_timeout_renders_envelope() {
    let (pool, _dir) = common::test_pool().await;
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(api_router(state, Duration::from_millis(200))).unwrap();

    // Hold the write lock so the insert waits on the busy timeout.
    let mut writer = pool.acquire().await.unwrap();
    sqlx::query("BEGIN IMMEDIATE")
        .execute(&mut *writer)
        .await
        .unwrap();

    let response = server
        .post("/url")
        .add_header("Authorization", common::VALID_AUTH)
        .json(&json!({ "url": "https://google.com", "alias": "google" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "request timed out" })
    );

    sqlx::query("ROLLBACK").execute(&mut *writer).await.unwrap();
}
