mod birds;
mod classify;
mod error_response;
mod health;
mod identify;
mod upload;

pub use birds::{get_bird_handler, list_birds_handler};
pub use classify::classify_handler;
pub use error_response::{ErrorResponse, error_response};
pub use health::health_handler;
pub use identify::identify_handler;
pub use upload::{AUDIO_FIELD, NO_AUDIO_MESSAGE, read_audio_field};
