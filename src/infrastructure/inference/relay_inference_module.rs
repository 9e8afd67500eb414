use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::application::ports::{ClassificationService, InferenceError, InferenceModule};
use crate::domain::{AudioUpload, AudioWindow, ClassificationSet, ModelProperties};
use crate::infrastructure::audio::encode_pcm16_wav;
use crate::infrastructure::classification::parse_classification;

const WINDOW_FILE_NAME: &str = "window.wav";
const WINDOW_CONTENT_TYPE: &str = "audio/wav";

pub struct RelayInferenceModule {
    service: Arc<dyn ClassificationService>,
    properties: ModelProperties,
    initialized: OnceCell<()>,
}

impl RelayInferenceModule {
    pub fn new(service: Arc<dyn ClassificationService>, properties: ModelProperties) -> Self {
        Self {
            service,
            properties,
            initialized: OnceCell::new(),
        }
    }
}

#[async_trait]
impl InferenceModule for RelayInferenceModule {
    async fn init(&self) -> Result<(), InferenceError> {
        self.initialized
            .get_or_init(|| async {
                tracing::info!(
                    project = %self.properties.project_name,
                    "Relay inference module initialized"
                );
            })
            .await;
        Ok(())
    }

    fn properties(&self) -> Result<ModelProperties, InferenceError> {
        if !self.initialized.initialized() {
            return Err(InferenceError::NotInitialized);
        }
        Ok(self.properties.clone())
    }

    async fn classify(&self, window: &AudioWindow) -> Result<ClassificationSet, InferenceError> {
        if !self.initialized.initialized() {
            return Err(InferenceError::NotInitialized);
        }
        if window.len() != self.properties.input_features_count {
            return Err(InferenceError::InputSizeMismatch {
                expected: self.properties.input_features_count,
                got: window.len(),
            });
        }

        let wav = encode_pcm16_wav(window.samples(), window.sample_rate())
            .map_err(|e| InferenceError::ClassificationFailed(format!("wav encoding: {}", e)))?;
        let upload = AudioUpload::new(wav)
            .with_file_name(WINDOW_FILE_NAME)
            .with_content_type(WINDOW_CONTENT_TYPE);

        let payload = self
            .service
            .classify(&upload)
            .await
            .map_err(|e| InferenceError::ClassificationFailed(e.to_string()))?;

        parse_classification(&payload).map_err(|e| InferenceError::MalformedPayload(e.to_string()))
    }
}
