// Router-level tests that never reach the database: the pool connects
// lazily and every request here is rejected before the first query.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

fn test_app() -> axum::Router {
    std::env::set_var("JWT_SECRET", "router-test-secret");

    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@127.0.0.1:1/ideaboard")
        .expect("lazy pool");

    ideaboard_api::app(pool)
}

fn bearer_token() -> String {
    std::env::set_var("JWT_SECRET", "router-test-secret");

    let user = ideaboard_api::database::models::User {
        id: Uuid::new_v4(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password_hash: String::new(),
    };
    let claims = ideaboard_api::auth::Claims::new(&user);
    ideaboard_api::auth::generate_jwt(claims).expect("token")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn create_without_token_is_unauthorized() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ideas")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"title":"A","description":"B","summary":"C"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/ideas/{}", Uuid::new_v4()))
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_auth_scheme_is_unauthorized() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ideas")
                .header(header::AUTHORIZATION, "Token abcdef")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_missing_fields_is_rejected() {
    // Validation runs before any store call
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Ada"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn login_blank_fields_are_rejected() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email":"   ","password":"pw"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_id_is_plain_not_found() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/ideas/answer-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    // Nothing in the body hints that the id was malformed rather than missing
    assert_eq!(body, serde_json::json!({ "message": "Idea not found" }));
}

#[tokio::test]
async fn authenticated_delete_with_malformed_id_is_not_found() {
    let token = bearer_token();

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/ideas/answer-42")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn authenticated_put_with_malformed_id_is_not_found() {
    let token = bearer_token();

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/ideas/answer-42")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"title":"A","description":"B","summary":"C"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
