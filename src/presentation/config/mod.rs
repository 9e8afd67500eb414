mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, CorsSettings, IdentificationSettings, InferenceSettings, LoggingSettings,
    RelaySettings, ServerSettings, Settings,
};
