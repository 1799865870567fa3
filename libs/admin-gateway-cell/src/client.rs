use reqwest::{header::CONTENT_TYPE, Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{CancelRequest, FeedbackStatusRequest, RescheduleRequest};

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The remote backend answered with a non-success status. The body is
    /// passed along untouched so the caller sees the server's own message.
    #[error("remote admin API error ({status}): {body}")]
    Remote { status: u16, body: String },

    #[error("admin API transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Remote { status: 404, body } => AppError::NotFound(body),
            GatewayError::Remote { status: 400, body } => AppError::BadRequest(body),
            other => AppError::ExternalService(other.to_string()),
        }
    }
}

/// Thin proxy onto the remote admin backend. One outbound call per
/// operation, bearer credential forwarded as-is, no retry and no cache.
pub struct AdminGatewayClient {
    client: Client,
    base_url: String,
}

impl AdminGatewayClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.admin_api_url.clone(),
        }
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        auth_token: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Proxying {} {}", method, url);

        let mut req = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(auth_token);

        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body is a transport failure, not a
            // remote error with an empty message.
            let body = response.text().await?;
            error!("Admin API error ({}): {}", status, body);
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }

    // ---- users ----

    pub async fn list_users(
        &self,
        token: &str,
        params: &[(String, String)],
    ) -> Result<Value, GatewayError> {
        self.request(Method::GET, "/admin/users", token, params, None)
            .await
    }

    pub async fn user_stats(&self, token: &str) -> Result<Value, GatewayError> {
        self.request(Method::GET, "/admin/users/stats", token, &[], None)
            .await
    }

    pub async fn get_user(&self, token: &str, user_id: &str) -> Result<Value, GatewayError> {
        self.request(
            Method::GET,
            &format!("/admin/users/{}", user_id),
            token,
            &[],
            None,
        )
        .await
    }

    pub async fn create_user(&self, token: &str, user: Value) -> Result<Value, GatewayError> {
        self.request(Method::POST, "/admin/users", token, &[], Some(user))
            .await
    }

    pub async fn update_user(
        &self,
        token: &str,
        user_id: &str,
        user: Value,
    ) -> Result<Value, GatewayError> {
        self.request(
            Method::PUT,
            &format!("/admin/users/{}", user_id),
            token,
            &[],
            Some(user),
        )
        .await
    }

    pub async fn toggle_user_status(
        &self,
        token: &str,
        user_id: &str,
    ) -> Result<Value, GatewayError> {
        self.request(
            Method::PATCH,
            &format!("/admin/users/{}/toggle-status", user_id),
            token,
            &[],
            None,
        )
        .await
    }

    pub async fn delete_user(&self, token: &str, user_id: &str) -> Result<Value, GatewayError> {
        self.request(
            Method::DELETE,
            &format!("/admin/users/{}", user_id),
            token,
            &[],
            None,
        )
        .await
    }

    // ---- appointments ----

    pub async fn list_appointments(
        &self,
        token: &str,
        params: &[(String, String)],
    ) -> Result<Value, GatewayError> {
        self.request(Method::GET, "/admin/appointments", token, params, None)
            .await
    }

    pub async fn reschedule_appointment(
        &self,
        token: &str,
        appointment_id: &str,
        body: &RescheduleRequest,
    ) -> Result<Value, GatewayError> {
        self.request(
            Method::PUT,
            &format!("/admin/appointments/{}/reschedule", appointment_id),
            token,
            &[],
            Some(serde_json::to_value(body)?),
        )
        .await
    }

    pub async fn cancel_appointment(
        &self,
        token: &str,
        appointment_id: &str,
        body: &CancelRequest,
    ) -> Result<Value, GatewayError> {
        self.request(
            Method::PATCH,
            &format!("/admin/appointments/{}/cancel", appointment_id),
            token,
            &[],
            Some(serde_json::to_value(body)?),
        )
        .await
    }

    // ---- dashboard and metrics ----

    pub async fn dashboard_stats(&self, token: &str) -> Result<Value, GatewayError> {
        self.request(Method::GET, "/admin/dashboard/stats", token, &[], None)
            .await
    }

    pub async fn system_metrics(&self, token: &str) -> Result<Value, GatewayError> {
        self.request(Method::GET, "/admin/system/metrics", token, &[], None)
            .await
    }

    // ---- feedback ----

    pub async fn list_feedback(
        &self,
        token: &str,
        params: &[(String, String)],
    ) -> Result<Value, GatewayError> {
        self.request(Method::GET, "/admin/feedback", token, params, None)
            .await
    }

    pub async fn get_feedback(
        &self,
        token: &str,
        feedback_id: &str,
    ) -> Result<Value, GatewayError> {
        self.request(
            Method::GET,
            &format!("/admin/feedback/{}", feedback_id),
            token,
            &[],
            None,
        )
        .await
    }

    pub async fn update_feedback_status(
        &self,
        token: &str,
        feedback_id: &str,
        body: &FeedbackStatusRequest,
    ) -> Result<Value, GatewayError> {
        self.request(
            Method::PATCH,
            &format!("/admin/feedback/{}/status", feedback_id),
            token,
            &[],
            Some(serde_json::to_value(body)?),
        )
        .await
    }

    pub async fn delete_feedback(
        &self,
        token: &str,
        feedback_id: &str,
    ) -> Result<Value, GatewayError> {
        self.request(
            Method::DELETE,
            &format!("/admin/feedback/{}", feedback_id),
            token,
            &[],
            None,
        )
        .await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
