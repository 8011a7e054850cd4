//! Authentication API integration tests
//!
//! Tests for registration and login.

use axum::http::{Method, StatusCode};
use chatrelay::backend::auth::handlers::register::REGISTERED;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{register_and_login, test_token_service, TestApp};
use crate::{assert_contains, assert_error_code};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let response = app
        .post("/register", None, json!({ "email": "a@x.com", "password": "p1" }))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.text(), REGISTERED);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    let first = register_and_login(&app, "a@x.com", "p1").await;

    let response = app
        .post("/register", None, json!({ "email": "a@x.com", "password": "other" }))
        .await;
    assert_error_code!(response, StatusCode::BAD_REQUEST, "duplicate_email");

    // The original account is untouched: its password still works, the new one does not
    let user = app.state.users.find_by_email("a@x.com").await.unwrap().unwrap();
    let verified = test_token_service().user_id(&first.token).unwrap();
    assert_eq!(user.id, verified);

    let response = app
        .post("/login", None, json!({ "email": "a@x.com", "password": "other" }))
        .await;
    assert_error_code!(response, StatusCode::BAD_REQUEST, "invalid_credentials");
}

#[tokio::test]
async fn test_password_is_not_stored_in_plaintext() {
    let app = TestApp::new();
    register_and_login(&app, "a@x.com", "p1").await;

    let user = app.state.users.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(user.password_hash != "p1");
    assert!(bcrypt::verify("p1", &user.password_hash).unwrap());
}

#[tokio::test]
async fn test_login_token_identifies_registered_user() {
    let app = TestApp::new();
    let test_user = register_and_login(&app, "a@x.com", "p1").await;

    let user = app.state.users.find_by_email(&test_user.email).await.unwrap().unwrap();
    let verified = test_token_service().user_id(&test_user.token).unwrap();
    assert_eq!(verified, user.id);
}

#[tokio::test]
async fn test_login_wrong_password_issues_no_token() {
    let app = TestApp::new();
    register_and_login(&app, "a@x.com", "p1").await;

    let response = app
        .post("/login", None, json!({ "email": "a@x.com", "password": "wrong" }))
        .await;

    assert_error_code!(response, StatusCode::BAD_REQUEST, "invalid_credentials");
    assert!(response.json().get("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .post("/login", None, json!({ "email": "nobody@x.com", "password": "p1" }))
        .await;

    assert_error_code!(response, StatusCode::BAD_REQUEST, "invalid_credentials");
    assert_contains!(response.json()["error"].as_str().unwrap(), "invalid email or password");
}

#[tokio::test]
async fn test_register_missing_field_is_rejected() {
    let app = TestApp::new();

    let response = app.post("/register", None, json!({ "email": "a@x.com" })).await;

    assert_error_code!(response, StatusCode::BAD_REQUEST, "registration_failed");
    assert!(app.state.users.find_by_email("a@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_register_without_json_body_is_rejected() {
    let app = TestApp::new();

    let response = app.request(Method::POST, "/register", None, None).await;
    assert_error_code!(response, StatusCode::BAD_REQUEST, "registration_failed");
}

#[tokio::test]
async fn test_login_malformed_body_is_validation_error() {
    let app = TestApp::new();

    let response = app.post("/login", None, json!({ "password": "p1" })).await;
    assert_error_code!(response, StatusCode::BAD_REQUEST, "validation");
}
