use std::sync::Arc;

use crate::application::ports::{ClassificationService, ClassificationServiceError};
use crate::domain::AudioUpload;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct RelayService<C>
where
    C: ClassificationService + ?Sized,
{
    client: Arc<C>,
    max_upload_bytes: usize,
}

impl<C> RelayService<C>
where
    C: ClassificationService + ?Sized,
{
    pub fn new(client: Arc<C>, max_upload_bytes: usize) -> Self {
        Self {
            client,
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    #[tracing::instrument(skip(self, upload), fields(bytes = upload.len()))]
    pub async fn forward(&self, upload: &AudioUpload) -> Result<serde_json::Value, RelayError> {
        if upload.is_empty() {
            return Err(RelayError::EmptyUpload);
        }
        if upload.len() > self.max_upload_bytes {
            return Err(RelayError::TooLarge {
                size: upload.len(),
                limit: self.max_upload_bytes,
            });
        }

        let payload = self.client.classify(upload).await?;

        tracing::info!(
            file_name = upload.file_name_or_default(),
            content_type = upload.content_type_or_default(),
            "Classification relayed"
        );

        Ok(payload)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("no audio file provided")]
    EmptyUpload,
    #[error("audio file too large: {size} bytes exceeds {limit}")]
    TooLarge { size: usize, limit: usize },
    #[error("upstream: {0}")]
    Upstream(#[from] ClassificationServiceError),
}
