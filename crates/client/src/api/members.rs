//! Member resource client

use std::sync::Arc;

use stylematch_domain::{CreateMemberRequest, Member, Page, Result, UpdateMemberRequest};

use super::transport::ApiTransport;

/// Client for `/api/members`.
pub struct MembersApi {
    transport: Arc<ApiTransport>,
}

impl MembersApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// List members, 0-indexed pages.
    pub async fn list(&self, page: i32, size: i32) -> Result<Page<Member>> {
        let query = [("page", page.to_string()), ("size", size.to_string())];
        self.transport.get_json("/api/members", &query).await
    }

    /// Fetch one member.
    pub async fn get(&self, member_id: i64) -> Result<Member> {
        self.transport.get_json(&format!("/api/members/{member_id}"), &[]).await
    }

    /// Create a member.
    pub async fn create(&self, request: &CreateMemberRequest) -> Result<Member> {
        self.transport.post_json("/api/members", request).await
    }

    /// Update a member; omitted fields are untouched.
    pub async fn update(&self, member_id: i64, request: &UpdateMemberRequest) -> Result<Member> {
        self.transport.put_json(&format!("/api/members/{member_id}"), request).await
    }

    /// Soft-delete a member.
    pub async fn delete(&self, member_id: i64) -> Result<()> {
        self.transport.delete(&format!("/api/members/{member_id}")).await
    }
}
