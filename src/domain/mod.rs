mod audio;
mod classification;
mod identification;
mod label;
mod model_properties;
mod species;
mod upload;

pub use audio::{AudioWindow, AudioWindowError, DecodedAudio};
pub use classification::{ClassificationResult, ClassificationSet, ClassificationSetError};
pub use identification::{AlternativePrediction, Identification, confidence_percent};
pub use label::Label;
pub use model_properties::ModelProperties;
pub use species::SpeciesRecord;
pub use upload::{AudioUpload, DEFAULT_UPLOAD_CONTENT_TYPE, DEFAULT_UPLOAD_FILE_NAME};
