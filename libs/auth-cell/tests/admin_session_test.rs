use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use auth_cell::middleware::GuardContext;
use auth_cell::router::{auth_routes, portal_routes};
use shared_models::auth::AdminInfo;
use shared_store::{keys, MemoryRepository, RepositoryExt};
use shared_utils::test_utils::TestConfig;

fn guard_context() -> Arc<GuardContext> {
    Arc::new(GuardContext {
        config: TestConfig::default().to_arc(),
        repo: Arc::new(MemoryRepository::new()),
    })
}

fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn admin_login_persists_pair_and_guard_renders() {
    let ctx = guard_context();
    let app = auth_routes(ctx.clone());

    let response = app
        .oneshot(post_json(
            "/admin/login",
            json!({ "username": "admin", "password": "admin123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Both slots are persisted by the login itself.
    let token = ctx.repo.get::<String>(keys::AUTH_TOKEN).unwrap();
    assert!(token.is_some_and(|t| !t.is_empty()));

    let info = ctx.repo.get::<AdminInfo>(keys::USER_INFO).unwrap().unwrap();
    assert!(info.is_admin());
    assert!(info.has_permission("user_management"));

    // The admin dashboard guard now resolves to render.
    let dashboard = portal_routes(ctx)
        .oneshot(
            Request::builder()
                .uri("/admin-dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(dashboard.status(), StatusCode::OK);
}

#[tokio::test]
async fn wrong_credentials_are_rejected_without_persisting() {
    let ctx = guard_context();
    let app = auth_routes(ctx.clone());

    let response = app
        .oneshot(post_json(
            "/admin/login",
            json!({ "username": "admin", "password": "not-the-password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(ctx.repo.get::<String>(keys::AUTH_TOKEN).unwrap(), None);
    assert!(ctx.repo.get::<AdminInfo>(keys::USER_INFO).unwrap().is_none());
}

#[tokio::test]
async fn logout_clears_both_slots() {
    let ctx = guard_context();

    let login = auth_routes(ctx.clone())
        .oneshot(post_json(
            "/admin/login",
            json!({ "username": "admin", "password": "admin123" }),
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);

    let logout = auth_routes(ctx.clone())
        .oneshot(post_json("/logout", json!({})))
        .await
        .unwrap();
    assert_eq!(logout.status(), StatusCode::OK);

    assert_eq!(ctx.repo.get::<String>(keys::AUTH_TOKEN).unwrap(), None);
    assert!(ctx.repo.get::<AdminInfo>(keys::USER_INFO).unwrap().is_none());

    // With the pair gone, the admin guard is back to the landing redirect.
    let dashboard = portal_routes(ctx)
        .oneshot(
            Request::builder()
                .uri("/admin-dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(dashboard.status(), StatusCode::SEE_OTHER);
    assert_eq!(dashboard.headers().get(header::LOCATION).unwrap(), "/");
}
