//! File upload payloads

use serde::{Deserialize, Serialize};

/// Business category an uploaded file belongs to.
///
/// Sent as the `bizType` query parameter and echoed back in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadBizType {
    Member,
    Clothing,
}

impl UploadBizType {
    /// Wire value used in the `bizType` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Clothing => "clothing",
        }
    }
}

/// Upload result returned by `POST /api/files/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Publicly accessible file URL.
    pub url: String,
    /// Object key in the storage backend.
    pub object_key: String,
    pub biz_type: UploadBizType,
    pub original_name: String,
    /// File size in bytes.
    pub size: u64,
    #[serde(default)]
    pub content_type: Option<String>,
}
