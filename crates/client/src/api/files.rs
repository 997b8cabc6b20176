//! File upload client

use std::sync::Arc;

use stylematch_domain::{Result, UploadBizType, UploadedFile};
use tracing::instrument;

use super::transport::ApiTransport;

/// Owned file content for a multipart upload.
///
/// The bytes are owned so the form can be rebuilt if the upload is replayed
/// after a token refresh.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// MIME type, e.g. "image/png". Left to the server to sniff when absent.
    pub content_type: Option<String>,
}

impl FilePayload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), bytes, content_type: None }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Client for `/api/files`.
pub struct FilesApi {
    transport: Arc<ApiTransport>,
}

impl FilesApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Upload a file, tagged with the business category it belongs to.
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    pub async fn upload(&self, file: FilePayload, biz_type: UploadBizType) -> Result<UploadedFile> {
        let query = [("bizType", biz_type.as_str().to_string())];
        self.transport.post_multipart("/api/files/upload", &query, file).await
    }
}
