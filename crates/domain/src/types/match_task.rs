//! Match task orchestration payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a match task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Queued,
    Running,
    Succeeded,
    Failed,
}

/// Request body for `POST /api/match/tasks`.
///
/// The backend caps `clothing_ids` at 20 candidates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchTaskRequest {
    pub member_id: i64,
    pub clothing_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
}

/// Acknowledgement returned when a task is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchTaskResponse {
    pub task_id: String,
    pub status: TaskStatus,
}

/// Preview prompt generated for one outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitPreview {
    pub title: String,
    pub outfit_description: String,
    pub image_prompt: String,
}

/// One TOP + BOTTOM outfit recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation {
    /// Outfit sequence number within the task result, starting from 1.
    pub outfit_no: i32,
    pub top_clothing_id: i64,
    pub bottom_clothing_id: i64,
    pub score: i32,
    pub reason: String,
    #[serde(default)]
    pub preview: Option<OutfitPreview>,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Legacy flattened recommendation item, derived from outfits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResultItem {
    pub clothing_id: i64,
    pub reason: String,
    pub score: i32,
}

/// Task detail returned by `GET /api/match/tasks/{taskId}`.
///
/// `result` and `preview` are legacy views retained by the backend; new
/// consumers should read `outfits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTaskDetail {
    pub task_id: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub strategy_name: Option<String>,
    #[serde(default)]
    pub outfits: Vec<OutfitRecommendation>,
    #[serde(default)]
    pub result: Vec<MatchResultItem>,
    #[serde(default)]
    pub preview: Option<OutfitPreview>,
    /// Error message for a failed task, or a warning for a degraded preview.
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Task summary item returned by the task list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTaskSummary {
    pub task_id: String,
    pub member_id: i64,
    #[serde(default)]
    pub scene: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub strategy_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
