use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{AudioDecoder, AudioDecoderError, InferenceError, InferenceModule};
use crate::domain::Identification;

use super::identification_resolver::{IdentificationError, IdentificationResolver};
use super::window_preparer::{PrepareError, WindowPreparer};

pub struct IdentificationService {
    decoder: Arc<dyn AudioDecoder>,
    preparer: WindowPreparer,
    inference: Arc<dyn InferenceModule>,
    resolver: IdentificationResolver,
}

impl IdentificationService {
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        preparer: WindowPreparer,
        inference: Arc<dyn InferenceModule>,
        resolver: IdentificationResolver,
    ) -> Self {
        Self {
            decoder,
            preparer,
            inference,
            resolver,
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn identify(&self, data: Bytes) -> Result<Identification, IdentifyError> {
        if data.is_empty() {
            return Err(IdentifyError::EmptyUpload);
        }

        let decoder = Arc::clone(&self.decoder);
        let decoded = tokio::task::spawn_blocking(move || decoder.decode(&data))
            .await
            .map_err(|e| {
                IdentifyError::Decoding(AudioDecoderError::DecodingFailed(format!(
                    "decoder task: {}",
                    e
                )))
            })??;

        tracing::debug!(
            samples = decoded.samples.len(),
            sample_rate = decoded.sample_rate,
            duration_secs = decoded.duration_secs(),
            "Recording decoded"
        );

        let window = self.preparer.prepare_decoded(decoded)?;

        self.inference.init().await?;
        let classification = self.inference.classify(&window).await?;

        tracing::debug!(
            predictions = classification.len(),
            anomaly = ?classification.anomaly(),
            "Window classified"
        );

        Ok(self.resolver.resolve(&classification)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdentifyError {
    #[error("no audio file provided")]
    EmptyUpload,
    #[error("decoding: {0}")]
    Decoding(#[from] AudioDecoderError),
    #[error("preparation: {0}")]
    Preparation(#[from] PrepareError),
    #[error("inference: {0}")]
    Inference(#[from] InferenceError),
    #[error("resolution: {0}")]
    Resolution(#[from] IdentificationError),
}

impl IdentifyError {
    /// Message shown to the person who made the recording.
    pub fn user_message(&self) -> String {
        match self {
            IdentifyError::EmptyUpload => "No audio file provided".to_string(),
            IdentifyError::Decoding(_) => {
                "Could not read the recording. Please try again.".to_string()
            }
            IdentifyError::Preparation(PrepareError::TooShort { got, need }) => format!(
                "Recording too short - got {} samples, need {}",
                got, need
            ),
            IdentifyError::Preparation(PrepareError::SignalTooWeak { .. }) => {
                "Audio signal too weak - please record closer to the bird".to_string()
            }
            IdentifyError::Preparation(PrepareError::SampleRateMismatch { got, expected }) => {
                format!("Invalid sample rate: {}Hz. Required: {}Hz", got, expected)
            }
            IdentifyError::Preparation(_) => {
                "Error processing the recording. Please try again.".to_string()
            }
            IdentifyError::Inference(InferenceError::MalformedPayload(_)) => {
                "Invalid classification result format".to_string()
            }
            IdentifyError::Inference(_) => "Failed to classify audio".to_string(),
            IdentifyError::Resolution(IdentificationError::NoPredictions) => {
                "No bird classifications found".to_string()
            }
            IdentifyError::Resolution(IdentificationError::LowConfidence { .. }) => {
                "No confident predictions found".to_string()
            }
            IdentifyError::Resolution(IdentificationError::UnknownSpecies(label)) => {
                format!("Bird '{}' not found in database", label)
            }
        }
    }
}
