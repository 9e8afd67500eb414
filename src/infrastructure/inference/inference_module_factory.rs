use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::ports::{ClassificationService, InferenceError, InferenceModule};
use crate::domain::ModelProperties;

use super::relay_inference_module::RelayInferenceModule;
use super::scaffold_inference_module::ScaffoldInferenceModule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceProvider {
    #[default]
    Scaffold,
    Relay,
}

pub struct InferenceModuleFactory;

impl InferenceModuleFactory {
    pub fn create(
        provider: InferenceProvider,
        properties: ModelProperties,
        classification_service: Option<Arc<dyn ClassificationService>>,
    ) -> Result<Arc<dyn InferenceModule>, InferenceError> {
        match provider {
            InferenceProvider::Scaffold => {
                Ok(Arc::new(ScaffoldInferenceModule::with_leading_label(properties)))
            }
            InferenceProvider::Relay => {
                let service = classification_service.ok_or_else(|| {
                    InferenceError::InitializationFailed(
                        "classification service required for relay inference".to_string(),
                    )
                })?;
                Ok(Arc::new(RelayInferenceModule::new(service, properties)))
            }
        }
    }
}
