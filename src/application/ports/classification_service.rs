use async_trait::async_trait;

use crate::domain::AudioUpload;

#[async_trait]
pub trait ClassificationService: Send + Sync {
    async fn classify(
        &self,
        upload: &AudioUpload,
    ) -> Result<serde_json::Value, ClassificationServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassificationServiceError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
