use async_trait::async_trait;

use crate::domain::{AudioWindow, ClassificationSet, ModelProperties};

/// A pretrained audio classifier. `init` must complete before `properties`
/// or `classify` are called; calling it again is a no-op.
#[async_trait]
pub trait InferenceModule: Send + Sync {
    async fn init(&self) -> Result<(), InferenceError>;

    fn properties(&self) -> Result<ModelProperties, InferenceError>;

    async fn classify(&self, window: &AudioWindow) -> Result<ClassificationSet, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("module is not initialized")]
    NotInitialized,
    #[error("initialization failed: {0}")]
    InitializationFailed(String),
    #[error("input size mismatch: expected {expected} samples, got {got}")]
    InputSizeMismatch { expected: usize, got: usize },
    #[error("classification failed: {0}")]
    ClassificationFailed(String),
    #[error("malformed classification payload: {0}")]
    MalformedPayload(String),
}
