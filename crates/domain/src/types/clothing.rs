//! Clothing inventory payloads

use serde::{Deserialize, Serialize};

use super::body_profile::GarmentSize;
use crate::errors::{Result, StyleMatchError};

/// Garment category. The backend only accepts TOP/BOTTOM on create/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClothingType {
    Top,
    Bottom,
    OnePiece,
    Set,
}

/// Inventory shelf status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClothingStatus {
    OnShelf,
    OffShelf,
}

impl ClothingStatus {
    /// Wire value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnShelf => "ON_SHELF",
            Self::OffShelf => "OFF_SHELF",
        }
    }
}

/// A clothing inventory item.
///
/// `size_data` is an opaque JSON document, see [`ClothingSizeData`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub style_tags: Option<String>,
    pub clothing_type: ClothingType,
    pub status: ClothingStatus,
    #[serde(default)]
    pub size_data: Option<String>,
}

/// Payload of `GET /api/clothing` (status-filtered pool listing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingPage {
    pub items: Vec<ClothingItem>,
    pub total: i64,
}

/// Request body for `POST /api/clothing`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClothingRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_tags: Option<String>,
    pub clothing_type: ClothingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClothingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_data: Option<String>,
}

/// Request body for `PUT /api/clothing/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClothingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_tags: Option<String>,
    pub clothing_type: ClothingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_data: Option<String>,
}

/// Request body for `PATCH /api/clothing/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateClothingStatusRequest {
    pub status: ClothingStatus,
}

/// Garment measurements carried inside `ClothingItem::size_data`.
///
/// All fields are optional; which ones apply depends on the clothing type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingSizeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder_width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bust_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeve_length_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inseam_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_size: Option<GarmentSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_size: Option<GarmentSize>,
}

impl ClothingSizeData {
    /// Parse measurements from the JSON string stored on an item.
    ///
    /// # Errors
    /// Returns [`StyleMatchError::InvalidInput`] when the document does not
    /// parse.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| StyleMatchError::InvalidInput(format!("invalid size data: {e}")))
    }
}
