//! Integration tests for the JSON API.
//!
//! Wires the in-memory adapters through the full axum router and drives the
//! endpoints the way a client would: register, sign in, pick a plan at
//! checkout, and exercise the tier gate on the library.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use gameflix::adapters::auth::HmacPasswordHasher;
use gameflix::adapters::http::{api_router, AppState, SESSION_HEADER};
use gameflix::adapters::memory::{
    InMemoryGameRepository, InMemoryLibraryRepository, InMemoryReviewRepository,
    InMemorySessionStore, InMemoryUserRepository,
};

fn test_app() -> Router {
    let state = AppState {
        games: Arc::new(InMemoryGameRepository::new()),
        library: Arc::new(InMemoryLibraryRepository::new()),
        reviews: Arc::new(InMemoryReviewRepository::new()),
        users: Arc::new(InMemoryUserRepository::new()),
        sessions: Arc::new(InMemorySessionStore::new()),
        password_hasher: Arc::new(HmacPasswordHasher::new("integration-test-pepper")),
    };
    api_router(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    session_id: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = session_id {
        builder = builder.header(SESSION_HEADER, id);
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Registers and signs in a user, returning their session id.
async fn sign_in(app: &Router, username: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": username, "password": "hunter2!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": "hunter2!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["session_id"].as_str().unwrap().to_string()
}

/// Adds a game via the admin endpoint, returning its id.
async fn add_game(app: &Router, title: &str, tier: Option<&str>) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/admin/games",
        None,
        Some(json!({ "title": title, "genre": "Action", "subscription_tier": tier })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn register_login_and_logout_round_trip() {
    let app = test_app();
    let session_id = sign_in(&app, "alice").await;

    let (status, _) = send(&app, "POST", "/api/auth/logout", Some(&session_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The session is gone, so the library now requires sign-in again.
    let (status, body) = send(&app, "GET", "/api/library", Some(&session_id), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error_code"], "SIGN_IN_REQUIRED");
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let app = test_app();
    sign_in(&app, "alice").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": "alice", "password": "other-pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_code"], "USERNAME_TAKEN");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = test_app();
    sign_in(&app, "alice").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "alice", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error_code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn browse_filters_by_search_and_genre() {
    let app = test_app();
    add_game(&app, "Neon Drift", None).await;
    add_game(&app, "Castle Quest", None).await;

    let (status, body) = send(&app, "GET", "/api/games?q=neon", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let games = body["games"].as_array().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["title"], "Neon Drift");
    assert_eq!(body["genres"], json!(["Action"]));
}

#[tokio::test]
async fn legacy_ultimate_game_blocks_indie_pack_user() {
    let app = test_app();
    // Legacy markers on both sides of the comparison.
    let game_id = add_game(&app, "Day One Blockbuster", Some("ultimate")).await;
    let session_id = sign_in(&app, "alice").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/plans/select/indie%20pack",
        Some(&session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        &app,
        "POST",
        "/api/plans/confirm",
        Some(&session_id),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/api/library/add",
        Some(&session_id),
        Some(json!({ "game_id": game_id })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error_code"], "TIER_REQUIRED");
    assert_eq!(body["message"], "This game requires AAA or higher.");

    // The detail page reports the same denial without blocking the view.
    let uri = format!("/api/games/{game_id}");
    let (status, body) = send(&app, "GET", &uri, Some(&session_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan_tier"], "Indie");
    assert_eq!(body["can_access"], false);
}

#[tokio::test]
async fn upgrading_to_aaa_unlocks_the_gated_game() {
    let app = test_app();
    let game_id = add_game(&app, "Day One Blockbuster", Some("aaa")).await;
    let session_id = sign_in(&app, "alice").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/plans/confirm",
        Some(&session_id),
        Some(json!({ "tier": "AAA Pack" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["key"], "AAA");

    let (status, body) = send(
        &app,
        "POST",
        "/api/library/add",
        Some(&session_id),
        Some(json!({ "game_id": game_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["already_present"], false);

    let (status, body) = send(&app, "GET", "/api/library", Some(&session_id), None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["game"]["title"], "Day One Blockbuster");
}

#[tokio::test]
async fn unrecognized_tier_marker_gates_nothing() {
    let app = test_app();
    let game_id = add_game(&app, "Mystery Edition", Some("collectors cut")).await;
    let session_id = sign_in(&app, "alice").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/library/add",
        Some(&session_id),
        Some(json!({ "game_id": game_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn checkout_resolves_legacy_pro_to_indie_upgrade() {
    let app = test_app();

    // Anonymous checkout: a session is created and echoed back.
    let (status, body) = send(&app, "GET", "/api/plans/checkout?tier=pro", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected"]["key"], "Indie");
    assert_eq!(body["selected"]["label"], "Indie Pack");
    assert_eq!(body["selected"]["price"], "$12.99");
    assert_eq!(body["current"]["key"], "Free");
    assert_eq!(body["is_upgrade"], true);
    assert_eq!(body["tiers"].as_array().unwrap().len(), 4);

    // Reloading without a tier keeps the pending selection.
    let session_id = body["session_id"].as_str().unwrap().to_string();
    let (status, body) = send(&app, "GET", "/api/plans/checkout", Some(&session_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected"]["key"], "Indie");
}

#[tokio::test]
async fn plans_page_reflects_the_confirmed_tier() {
    let app = test_app();
    let session_id = sign_in(&app, "alice").await;

    let (_, body) = send(&app, "GET", "/api/plans", Some(&session_id), None).await;
    assert_eq!(body["current"], "Free");

    send(
        &app,
        "POST",
        "/api/plans/confirm",
        Some(&session_id),
        Some(json!({ "tier": "retro" })),
    )
    .await;

    let (_, body) = send(&app, "GET", "/api/plans", Some(&session_id), None).await;
    assert_eq!(body["current"], "Retro");
}

#[tokio::test]
async fn review_flow_enforces_one_per_user() {
    let app = test_app();
    let game_id = add_game(&app, "Castle Quest", None).await;
    let session_id = sign_in(&app, "alice").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/reviews",
        Some(&session_id),
        Some(json!({ "game_id": game_id, "rating": 5, "comment": "Instant classic" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "alice");

    let (status, body) = send(
        &app,
        "POST",
        "/api/reviews",
        Some(&session_id),
        Some(json!({ "game_id": game_id, "rating": 1, "comment": "Changed my mind" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_code"], "ALREADY_REVIEWED");

    let uri = format!("/api/reviews?game_id={game_id}");
    let (status, body) = send(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviews"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn posting_a_review_requires_sign_in() {
    let app = test_app();
    let game_id = add_game(&app, "Castle Quest", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/reviews",
        None,
        Some(json!({ "game_id": game_id, "rating": 4, "comment": "nice" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error_code"], "SIGN_IN_REQUIRED");
}

#[tokio::test]
async fn unknown_game_detail_is_not_found() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/games/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "GAME_NOT_FOUND");
}

#[tokio::test]
async fn blank_game_title_is_rejected() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/games",
        None,
        Some(json!({ "title": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
}
