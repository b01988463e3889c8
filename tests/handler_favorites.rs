mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use character_catalog::routes::router;
use serde_json::{Value, json};
use sqlx::SqlitePool;

async fn make_server() -> (TestServer, SqlitePool, common::FakeUpstream) {
    let upstream = common::spawn_fake_upstream().await;
    let pool = common::memory_pool().await;
    let state = common::create_test_state(pool.clone(), &upstream.base_url);
    (TestServer::new(router(state)).unwrap(), pool, upstream)
}

// ─── ADD ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_add_defaults_user_and_lists_character() {
    let (server, pool, _upstream) = make_server().await;

    let response = server
        .post("/favorites/new")
        .json(&json!({ "characterId": "5" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "added character to favorites");
    assert_eq!(common::count_favorites(&pool, 1, 5).await, 1);

    let response = server.get("/favorites").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let characters = json["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["id"], "5");
    assert_eq!(characters[0]["name"], "Leia Organa");
    assert_eq!(characters[0]["homeworld"], "Alderaan");
    assert!(characters[0].get("films").is_none());
}

#[tokio::test]
async fn test_add_accepts_numeric_ids() {
    let (server, pool, _upstream) = make_server().await;

    let response = server
        .post("/favorites/new")
        .json(&json!({ "userId": 1, "characterId": 2 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(common::count_favorites(&pool, 1, 2).await, 1);
}

#[tokio::test]
async fn test_add_duplicate_is_rejected() {
    let (server, pool, _upstream) = make_server().await;

    server
        .post("/favorites/new")
        .json(&json!({ "userId": "1", "characterId": "1" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/favorites/new")
        .json(&json!({ "userId": "1", "characterId": "1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "character is already in favorites");
    assert_eq!(common::count_favorites(&pool, 1, 1).await, 1);
}

#[tokio::test]
async fn test_add_missing_character_id() {
    let (server, _pool, _upstream) = make_server().await;

    let response = server.post("/favorites/new").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "not a valid characterId"
    );
}

#[tokio::test]
async fn test_add_null_user_id_is_not_defaulted() {
    let (server, pool, _upstream) = make_server().await;

    let response = server
        .post("/favorites/new")
        .json(&json!({ "userId": null, "characterId": "5" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "not a valid userId");
    assert_eq!(common::count_favorites(&pool, 1, 5).await, 0);
}

#[tokio::test]
async fn test_add_malformed_body() {
    let (server, _pool, _upstream) = make_server().await;

    let response = server
        .post("/favorites/new")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["status"], "error");
}

#[tokio::test]
async fn test_add_for_unknown_user_is_store_error() {
    let (server, _pool, _upstream) = make_server().await;

    let response = server
        .post("/favorites/new")
        .json(&json!({ "userId": "77", "characterId": "1" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["message"],
        "not able to add to favorites"
    );
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_existing_favorite() {
    let (server, pool, _upstream) = make_server().await;

    server
        .post("/favorites/new")
        .json(&json!({ "characterId": "5" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete("/favorites/5").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "deleted character from favorites");
    assert_eq!(common::count_favorites(&pool, 1, 5).await, 0);
}

#[tokio::test]
async fn test_delete_with_explicit_user() {
    let (server, pool, _upstream) = make_server().await;
    common::insert_user(&pool, 2).await;

    server
        .post("/favorites/new")
        .json(&json!({ "userId": "2", "characterId": "1" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete("/favorites/1")
        .add_query_param("userId", "2")
        .await
        .assert_status_ok();

    assert_eq!(common::count_favorites(&pool, 2, 1).await, 0);
}

#[tokio::test]
async fn test_delete_absent_favorite() {
    let (server, pool, _upstream) = make_server().await;

    server
        .post("/favorites/new")
        .json(&json!({ "characterId": "1" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete("/favorites/5").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "character not present in favorites"
    );
    assert_eq!(common::count_favorites(&pool, 1, 1).await, 1);
}

#[tokio::test]
async fn test_delete_invalid_character_id() {
    let (server, _pool, _upstream) = make_server().await;

    let response = server.delete("/favorites/luke").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "not a valid characterId"
    );
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty() {
    let (server, _pool, _upstream) = make_server().await;

    let response = server.get("/favorites").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "success");
    assert!(json["characters"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_follows_insertion_order() {
    let (server, _pool, _upstream) = make_server().await;

    for id in ["5", "1", "2"] {
        server
            .post("/favorites/new")
            .json(&json!({ "characterId": id }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let json = server.get("/favorites").await.json::<Value>();
    let ids: Vec<&str> = json["characters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec!["5", "1", "2"]);
}

// ─── METHODS ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_favorites_routes_reject_other_methods() {
    let (server, _pool, _upstream) = make_server().await;

    let response = server.get("/favorites/new").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text(), "Only POST requests allowed");

    let response = server.post("/favorites/5").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text(), "Only DELETE requests allowed");

    let response = server.delete("/favorites").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text(), "Only GET requests allowed");
}
