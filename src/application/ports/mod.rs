mod audio_decoder;
mod classification_service;
mod inference_module;
mod species_repository;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use classification_service::{ClassificationService, ClassificationServiceError};
pub use inference_module::{InferenceError, InferenceModule};
pub use species_repository::{SpeciesCatalogError, SpeciesRepository};
