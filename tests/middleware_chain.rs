mod common;

use serde_json::{Value, json};

// ─── AUTHENTICATION ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_token_rejected() {
    let server = common::make_server(true);

    let response = server.get("/api/users").await;

    response.assert_status_unauthorized();

    let body = response.json::<Value>();
    assert_eq!(body["error"], "Unauthorized. Invalid or missing token.");
}

#[tokio::test]
async fn test_wrong_token_rejected() {
    let server = common::make_server(true);

    let response = server
        .get("/api/users")
        .add_header("Authorization", "Bearer wrong-token")
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_token_comparison_is_case_sensitive() {
    let server = common::make_server(true);

    let response = server
        .get("/api/users")
        .add_header(
            "Authorization",
            format!("Bearer {}", common::TEST_TOKEN.to_uppercase()),
        )
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let server = common::make_server(true);

    let response = server
        .get("/api/users")
        .add_header("Authorization", format!("Basic {}", common::TEST_TOKEN))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_fallback_header_accepted() {
    let server = common::make_server(true);

    let response = server
        .get("/api/users")
        .add_header("X-API-TOKEN", common::TEST_TOKEN)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unauthorized_request_does_not_mutate_store() {
    let server = common::make_server(true);

    server
        .post("/api/users")
        .json(&json!({
            "firstName": "Mallory",
            "lastName": "Intruder",
            "email": "mallory@techhive.io"
        }))
        .await
        .assert_status_unauthorized();

    server
        .delete("/api/users/1")
        .await
        .assert_status_unauthorized();

    let response = server
        .get("/api/users")
        .add_header("Authorization", common::bearer())
        .await;

    let body = response.json::<Value>();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_docs_prefix_exempt_from_auth() {
    let server = common::make_server(true);

    // No route is mounted under the docs prefix, so the request falls
    // through to 404 — the point is that it is not answered with 401.
    let response = server.get("/swagger/index.html").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_auth_gates_the_fault_endpoint() {
    let server = common::make_server(true);

    // Without a token the auth stage short-circuits before the handler can
    // fault: 401, not 500.
    let response = server.get("/api/test/throw").await;

    response.assert_status_unauthorized();
}

// ─── FAULT CONTAINMENT ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_throw_yields_generic_500_body() {
    let server = common::make_server(true);

    let response = server
        .get("/api/test/throw")
        .add_header("Authorization", common::bearer())
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json::<Value>();
    assert_eq!(body, json!({ "error": "Internal server error." }));
}

#[tokio::test]
async fn test_fault_does_not_poison_the_server() {
    let server = common::make_server(true);

    server
        .get("/api/test/throw")
        .add_header("Authorization", common::bearer())
        .await
        .assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    // The next request on the same server is served normally.
    server
        .get("/api/users")
        .add_header("Authorization", common::bearer())
        .await
        .assert_status_ok();
}

// ─── ERROR BODY SHAPE ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_all_error_bodies_carry_an_error_field() {
    let server = common::make_server(true);

    // 401
    let unauthorized = server.get("/api/users").await.json::<Value>();
    assert!(unauthorized["error"].is_string());

    // 404
    let not_found = server
        .get("/api/users/999")
        .add_header("Authorization", common::bearer())
        .await
        .json::<Value>();
    assert!(not_found["error"].is_string());

    // 400
    let invalid = server
        .post("/api/users")
        .add_header("Authorization", common::bearer())
        .json(&json!({ "firstName": "", "lastName": "", "email": "" }))
        .await
        .json::<Value>();
    assert!(invalid["error"].is_string());
    assert!(invalid["errors"].is_object());

    // 500
    let fault = server
        .get("/api/test/throw")
        .add_header("Authorization", common::bearer())
        .await
        .json::<Value>();
    assert_eq!(fault["error"], "Internal server error.");
}
