//! Clothing inventory client

use std::sync::Arc;

use stylematch_domain::{
    ClothingItem, ClothingPage, ClothingStatus, CreateClothingRequest, Page, Result,
    UpdateClothingRequest, UpdateClothingStatusRequest,
};

use super::transport::ApiTransport;

/// Client for `/api/clothing`.
pub struct ClothingApi {
    transport: Arc<ApiTransport>,
}

impl ClothingApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// List clothing filtered by shelf status (backend defaults to ON_SHELF).
    pub async fn list(
        &self,
        status: Option<ClothingStatus>,
        page: i32,
        size: i32,
    ) -> Result<ClothingPage> {
        let mut query = vec![("page", page.to_string()), ("size", size.to_string())];
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        self.transport.get_json("/api/clothing", &query).await
    }

    /// List all clothing regardless of status (excluding soft-deleted).
    pub async fn list_all(&self, page: i32, size: i32) -> Result<Page<ClothingItem>> {
        let query = [("page", page.to_string()), ("size", size.to_string())];
        self.transport.get_json("/api/clothing/all", &query).await
    }

    /// Fetch one clothing item.
    pub async fn get(&self, clothing_id: i64) -> Result<ClothingItem> {
        self.transport.get_json(&format!("/api/clothing/{clothing_id}"), &[]).await
    }

    /// Create a clothing item.
    pub async fn create(&self, request: &CreateClothingRequest) -> Result<ClothingItem> {
        self.transport.post_json("/api/clothing", request).await
    }

    /// Update a clothing item's basic info.
    pub async fn update(
        &self,
        clothing_id: i64,
        request: &UpdateClothingRequest,
    ) -> Result<ClothingItem> {
        self.transport.put_json(&format!("/api/clothing/{clothing_id}"), request).await
    }

    /// Move a clothing item on or off the shelf.
    pub async fn update_status(
        &self,
        clothing_id: i64,
        status: ClothingStatus,
    ) -> Result<ClothingItem> {
        let body = UpdateClothingStatusRequest { status };
        self.transport.patch_json(&format!("/api/clothing/{clothing_id}/status"), &body).await
    }

    /// Soft-delete a clothing item.
    pub async fn delete(&self, clothing_id: i64) -> Result<()> {
        self.transport.delete(&format!("/api/clothing/{clothing_id}")).await
    }
}
