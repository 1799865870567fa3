use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use serde_json::Value;
use tracing::info;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::client::AdminGatewayClient;
use crate::models::{CancelRequest, FeedbackStatusRequest, RescheduleRequest};

// Handlers are one-to-one with remote operations. Each builds the client
// from config, forwards the caller's bearer token and hands the remote
// payload back verbatim.

pub async fn list_users(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let users = client.list_users(auth.token(), &params).await?;
    Ok(Json(users))
}

pub async fn user_stats(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let stats = client.user_stats(auth.token()).await?;
    Ok(Json(stats))
}

pub async fn get_user(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let user = client.get_user(auth.token(), &user_id).await?;
    Ok(Json(user))
}

pub async fn create_user(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let created = client.create_user(auth.token(), body).await?;
    info!("Created admin-managed user");
    Ok(Json(created))
}

pub async fn update_user(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let updated = client.update_user(auth.token(), &user_id, body).await?;
    Ok(Json(updated))
}

pub async fn toggle_user_status(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let toggled = client.toggle_user_status(auth.token(), &user_id).await?;
    Ok(Json(toggled))
}

pub async fn delete_user(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let deleted = client.delete_user(auth.token(), &user_id).await?;
    info!("Deleted admin-managed user {}", user_id);
    Ok(Json(deleted))
}

pub async fn list_appointments(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let appointments = client.list_appointments(auth.token(), &params).await?;
    Ok(Json(appointments))
}

pub async fn reschedule_appointment(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(appointment_id): Path<String>,
    Json(body): Json<RescheduleRequest>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let rescheduled = client
        .reschedule_appointment(auth.token(), &appointment_id, &body)
        .await?;
    Ok(Json(rescheduled))
}

pub async fn cancel_appointment(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(appointment_id): Path<String>,
    Json(body): Json<CancelRequest>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let cancelled = client
        .cancel_appointment(auth.token(), &appointment_id, &body)
        .await?;
    Ok(Json(cancelled))
}

pub async fn dashboard_stats(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let stats = client.dashboard_stats(auth.token()).await?;
    Ok(Json(stats))
}

pub async fn system_metrics(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let metrics = client.system_metrics(auth.token()).await?;
    Ok(Json(metrics))
}

pub async fn list_feedback(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let feedback = client.list_feedback(auth.token(), &params).await?;
    Ok(Json(feedback))
}

pub async fn get_feedback(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(feedback_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let feedback = client.get_feedback(auth.token(), &feedback_id).await?;
    Ok(Json(feedback))
}

pub async fn update_feedback_status(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(feedback_id): Path<String>,
    Json(body): Json<FeedbackStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let updated = client
        .update_feedback_status(auth.token(), &feedback_id, &body)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_feedback(
    State(config): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(feedback_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let client = AdminGatewayClient::new(&config);
    let deleted = client.delete_feedback(auth.token(), &feedback_id).await?;
    Ok(Json(deleted))
}
