use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::application::ports::{InferenceError, InferenceModule};
use crate::domain::{AudioWindow, ClassificationResult, ClassificationSet, Label, ModelProperties};

const LEADING_SCORE: f32 = 0.85;

/// Stand-in model returning fixed scores, for running the service without a
/// trained model.
pub struct ScaffoldInferenceModule {
    properties: ModelProperties,
    scores: Vec<ClassificationResult>,
    initialized: OnceCell<()>,
}

impl ScaffoldInferenceModule {
    pub fn new(properties: ModelProperties, scores: Vec<ClassificationResult>) -> Self {
        Self {
            properties,
            scores,
            initialized: OnceCell::new(),
        }
    }

    /// The first label scores `0.85`; the rest share the remainder evenly.
    pub fn with_leading_label(properties: ModelProperties) -> Self {
        let scores = leading_scores(&properties.labels);
        Self::new(properties, scores)
    }

    fn ensure_initialized(&self) -> Result<(), InferenceError> {
        if self.initialized.initialized() {
            Ok(())
        } else {
            Err(InferenceError::NotInitialized)
        }
    }
}

fn leading_scores(labels: &[Label]) -> Vec<ClassificationResult> {
    let Some((first, rest)) = labels.split_first() else {
        return Vec::new();
    };
    let remainder = if rest.is_empty() {
        0.0
    } else {
        (1.0 - LEADING_SCORE) / rest.len() as f32
    };

    std::iter::once(ClassificationResult::new(first.clone(), LEADING_SCORE))
        .chain(
            rest.iter()
                .map(|label| ClassificationResult::new(label.clone(), remainder)),
        )
        .collect()
}

#[async_trait]
impl InferenceModule for ScaffoldInferenceModule {
    async fn init(&self) -> Result<(), InferenceError> {
        self.initialized
            .get_or_init(|| async {
                tracing::info!(
                    project = %self.properties.project_name,
                    labels = self.properties.labels.len(),
                    "Scaffold inference module initialized"
                );
            })
            .await;
        Ok(())
    }

    fn properties(&self) -> Result<ModelProperties, InferenceError> {
        self.ensure_initialized()?;
        Ok(self.properties.clone())
    }

    async fn classify(&self, window: &AudioWindow) -> Result<ClassificationSet, InferenceError> {
        self.ensure_initialized()?;

        if window.len() != self.properties.input_features_count {
            return Err(InferenceError::InputSizeMismatch {
                expected: self.properties.input_features_count,
                got: window.len(),
            });
        }

        ClassificationSet::new(self.scores.clone())
            .map_err(|e| InferenceError::ClassificationFailed(e.to_string()))
    }
}
