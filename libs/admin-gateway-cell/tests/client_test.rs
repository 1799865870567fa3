use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use admin_gateway_cell::client::{AdminGatewayClient, GatewayError};
use admin_gateway_cell::models::{FeedbackStatusRequest, RescheduleRequest};
use admin_gateway_cell::router::admin_routes;
use shared_config::AppConfig;

fn mock_config(base_url: &str) -> AppConfig {
    AppConfig {
        portal_jwt_secret: "test-secret-key-for-token-validation-must-be-long-enough".to_string(),
        admin_api_url: base_url.to_string(),
        store_path: String::new(),
        admin_username: "admin".to_string(),
        admin_password: "admin123".to_string(),
    }
}

#[tokio::test]
async fn forwards_bearer_token_to_remote() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/users/stats"))
        .and(header("Authorization", "Bearer admin-session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalUsers": 42,
            "activeUsers": 40
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AdminGatewayClient::new(&mock_config(&mock_server.uri()));
    let stats = client.user_stats("admin-session-token").await.unwrap();

    assert_eq!(stats["totalUsers"], 42);
}

#[tokio::test]
async fn pagination_params_pass_through_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .and(query_param("sortBy", "createdAt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [],
            "page": 2
        })))
        .mount(&mock_server)
        .await;

    let client = AdminGatewayClient::new(&mock_config(&mock_server.uri()));
    let params = vec![
        ("page".to_string(), "2".to_string()),
        ("limit".to_string(), "25".to_string()),
        ("sortBy".to_string(), "createdAt".to_string()),
    ];
    let page = client.list_users("tok", &params).await.unwrap();

    assert_eq!(page["page"], 2);
}

#[tokio::test]
async fn remote_error_body_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/users/u-17"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({ "message": "user has active appointments" })),
        )
        .mount(&mock_server)
        .await;

    let client = AdminGatewayClient::new(&mock_config(&mock_server.uri()));
    let err = client.delete_user("tok", "u-17").await.unwrap_err();

    assert_matches!(err, GatewayError::Remote { status: 409, ref body }
        if body.contains("active appointments"));
}

#[tokio::test]
async fn reschedule_sends_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/appointments/apt-3/reschedule"))
        .and(body_json(json!({
            "newDateTime": "2026-09-12T10:00:00Z",
            "reason": "practitioner unavailable"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "apt-3" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AdminGatewayClient::new(&mock_config(&mock_server.uri()));
    let body = RescheduleRequest {
        new_date_time: "2026-09-12T10:00:00Z".to_string(),
        reason: Some("practitioner unavailable".to_string()),
    };
    let updated = client
        .reschedule_appointment("tok", "apt-3", &body)
        .await
        .unwrap();

    assert_eq!(updated["id"], "apt-3");
}

#[tokio::test]
async fn feedback_status_omits_absent_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/admin/feedback/fb-9/status"))
        .and(body_json(json!({ "status": "resolved" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "fb-9" })))
        .mount(&mock_server)
        .await;

    let client = AdminGatewayClient::new(&mock_config(&mock_server.uri()));
    let body = FeedbackStatusRequest {
        status: "resolved".to_string(),
        admin_response: None,
    };
    let updated = client
        .update_feedback_status("tok", "fb-9", &body)
        .await
        .unwrap();

    assert_eq!(updated["id"], "fb-9");
}

// ==============================================================================
// PROXY ROUTES
// ==============================================================================

#[tokio::test]
async fn proxy_route_forwards_and_returns_remote_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/dashboard/stats"))
        .and(header("Authorization", "Bearer portal-admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointmentsToday": 7,
            "pendingFeedback": 3
        })))
        .mount(&mock_server)
        .await;

    let app = admin_routes(Arc::new(mock_config(&mock_server.uri())));
    let request = Request::builder()
        .method("GET")
        .uri("/dashboard/stats")
        .header("authorization", "Bearer portal-admin-token")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload["appointmentsToday"], 7);
}

#[tokio::test]
async fn proxy_route_maps_remote_404_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/feedback/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "feedback not found" })),
        )
        .mount(&mock_server)
        .await;

    let app = admin_routes(Arc::new(mock_config(&mock_server.uri())));
    let request = Request::builder()
        .method("GET")
        .uri("/feedback/missing")
        .header("authorization", "Bearer tok")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn proxy_route_without_bearer_is_rejected_before_forwarding() {
    // No remote server at all: the typed header extractor must fail first.
    let app = admin_routes(Arc::new(mock_config("http://127.0.0.1:9")));
    let request = Request::builder()
        .method("GET")
        .uri("/users")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
