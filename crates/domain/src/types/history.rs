//! Member match history payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Business lifecycle status for a match record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchRecordStatus {
    /// Generated but not confirmed by an operator.
    Draft,
    /// Confirmed by an operator as a selected look.
    Accepted,
    /// Used in an actual livestream.
    Broadcasted,
    /// Rejected by an operator.
    Rejected,
}

/// One match history record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistoryItem {
    pub id: i64,
    pub member_id: i64,
    #[serde(default)]
    pub member_name: Option<String>,
    pub clothing_id: i64,
    #[serde(default)]
    pub clothing_name: Option<String>,
    pub status: MatchRecordStatus,
    #[serde(default)]
    pub performance_score: Option<i32>,
    #[serde(default)]
    pub broadcast_date: Option<NaiveDateTime>,
}

/// Payload of `GET /api/members/{id}/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchHistory {
    pub records: Vec<MatchHistoryItem>,
    pub total: i64,
}

/// Request body for `POST /api/members/{id}/history/manual`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateManualHistoryRequest {
    pub clothing_id: i64,
    /// Defaults to "now" on the backend when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<i32>,
}

/// Request body for `PATCH /api/members/{id}/history/{recordId}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateHistoryStatusRequest {
    pub status: MatchRecordStatus,
}
