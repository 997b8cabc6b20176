//! Match task and history client

use std::sync::Arc;

use stylematch_domain::{
    CreateManualHistoryRequest, CreateMatchTaskRequest, CreateMatchTaskResponse, MatchHistory,
    MatchHistoryItem, MatchRecordStatus, MatchTaskDetail, MatchTaskSummary, Page, Result,
    UpdateHistoryStatusRequest,
};

use super::transport::ApiTransport;

/// Client for `/api/match/tasks` and the member history sub-resources.
pub struct MatchApi {
    transport: Arc<ApiTransport>,
}

impl MatchApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Launch a match task for a member over candidate clothing.
    ///
    /// The recommendation reason language follows the active locale, via
    /// the `Accept-Language` header the transport attaches.
    pub async fn create_task(
        &self,
        request: &CreateMatchTaskRequest,
    ) -> Result<CreateMatchTaskResponse> {
        self.transport.post_json("/api/match/tasks", request).await
    }

    /// Fetch task detail and results.
    pub async fn get_task(&self, task_id: &str) -> Result<MatchTaskDetail> {
        self.transport.get_json(&format!("/api/match/tasks/{task_id}"), &[]).await
    }

    /// Generate (or regenerate) the preview prompt for one outfit.
    pub async fn generate_outfit_preview(
        &self,
        task_id: &str,
        outfit_no: i32,
    ) -> Result<MatchTaskDetail> {
        self.transport
            .post_empty(&format!("/api/match/tasks/{task_id}/outfits/{outfit_no}/preview"))
            .await
    }

    /// List task summaries, optionally filtered by member.
    pub async fn list_tasks(
        &self,
        member_id: Option<i64>,
        page: i32,
        size: i32,
    ) -> Result<Page<MatchTaskSummary>> {
        let mut query = vec![("page", page.to_string()), ("size", size.to_string())];
        if let Some(member_id) = member_id {
            query.push(("memberId", member_id.to_string()));
        }
        self.transport.get_json("/api/match/tasks", &query).await
    }

    /// Fetch a member's match history, newest first. `limit` is capped at
    /// 100 by the backend.
    pub async fn history(&self, member_id: i64, limit: i32) -> Result<MatchHistory> {
        let query = [("limit", limit.to_string())];
        self.transport.get_json(&format!("/api/members/{member_id}/history"), &query).await
    }

    /// Record a manually-worn look for a member.
    pub async fn create_manual_history(
        &self,
        member_id: i64,
        request: &CreateManualHistoryRequest,
    ) -> Result<MatchHistoryItem> {
        self.transport.post_json(&format!("/api/members/{member_id}/history/manual"), request).await
    }

    /// Move a history record through its lifecycle (e.g. mark BROADCASTED).
    pub async fn update_history_status(
        &self,
        member_id: i64,
        record_id: i64,
        status: MatchRecordStatus,
    ) -> Result<MatchHistoryItem> {
        let body = UpdateHistoryStatusRequest { status };
        self.transport
            .patch_json(&format!("/api/members/{member_id}/history/{record_id}/status"), &body)
            .await
    }
}
