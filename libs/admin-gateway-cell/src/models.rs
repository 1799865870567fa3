use serde::{Deserialize, Serialize};

/// Body for `PUT /admin/appointments/{id}/reschedule`. Field names follow
/// the remote backend's contract, hence camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub new_date_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body for `PATCH /admin/appointments/{id}/cancel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body for `PATCH /admin/feedback/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStatusRequest {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
}
