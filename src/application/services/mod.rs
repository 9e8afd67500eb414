mod identification_resolver;
mod identification_service;
mod relay_service;
mod window_preparer;

pub use identification_resolver::{
    DEFAULT_MIN_CONFIDENCE, IdentificationError, IdentificationResolver, MAX_ALTERNATIVES,
};
pub use identification_service::{IdentificationService, IdentifyError};
pub use relay_service::{DEFAULT_MAX_UPLOAD_BYTES, RelayError, RelayService};
pub use window_preparer::{
    DEFAULT_SAMPLE_RATE, DEFAULT_SILENCE_THRESHOLD, DEFAULT_WINDOW_SIZE, PrepareError,
    WindowConfig, WindowPreparer,
};
