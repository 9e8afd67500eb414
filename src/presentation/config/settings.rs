use std::path::PathBuf;

use config::{Config, ConfigError, File, Map};
use serde::Deserialize;

use crate::application::services::{
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MIN_CONFIDENCE, DEFAULT_SAMPLE_RATE,
    DEFAULT_SILENCE_THRESHOLD, DEFAULT_WINDOW_SIZE, WindowConfig,
};
use crate::infrastructure::classification::EDGE_IMPULSE_BASE_URL;
use crate::infrastructure::inference::InferenceProvider;

use super::Environment;

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub relay: RelaySettings,
    pub audio: AudioSettings,
    pub identification: IdentificationSettings,
    pub inference: InferenceSettings,
    pub cors: CorsSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(environment, std::env::vars().collect())
    }

    /// Layers, lowest precedence first: built-in defaults, the optional
    /// `appsettings.<env>.toml`, `APP_*` variables (`APP_RELAY__API_KEY`),
    /// then the unprefixed `PORT`, `EDGE_IMPULSE_*` and `FRONTEND_URL`.
    pub fn load_from(
        environment: Environment,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let plain = |name: &str| vars.get(name).cloned();

        Config::builder()
            .add_source(File::with_name(&environment.settings_file_stem()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("server.port", plain("PORT"))?
            .set_override_option("relay.project_id", plain("EDGE_IMPULSE_PROJECT_ID"))?
            .set_override_option("relay.api_key", plain("EDGE_IMPULSE_API_KEY"))?
            .set_override_option("cors.frontend_url", plain("FRONTEND_URL"))?
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelaySettings {
    pub base_url: String,
    pub project_id: String,
    pub api_key: String,
    pub max_upload_mb: usize,
}

impl RelaySettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(BYTES_PER_MB)
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            base_url: EDGE_IMPULSE_BASE_URL.to_string(),
            project_id: String::new(),
            api_key: String::new(),
            max_upload_mb: DEFAULT_MAX_UPLOAD_BYTES / BYTES_PER_MB,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub sample_rate: u32,
    pub window_size: usize,
    pub silence_threshold: f32,
}

impl AudioSettings {
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            sample_rate: self.sample_rate,
            window_size: self.window_size,
            silence_threshold: self.silence_threshold,
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            window_size: DEFAULT_WINDOW_SIZE,
            silence_threshold: DEFAULT_SILENCE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentificationSettings {
    pub min_confidence: f32,
    pub species_file: Option<PathBuf>,
}

impl Default for IdentificationSettings {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            species_file: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    pub provider: InferenceProvider,
    pub project_name: String,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            provider: InferenceProvider::Scaffold,
            project_name: "birdcall".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    pub frontend_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}
