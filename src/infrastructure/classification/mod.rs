mod edge_impulse_client;
mod edge_impulse_payload;

pub use edge_impulse_client::{EDGE_IMPULSE_BASE_URL, EdgeImpulseClient};
pub use edge_impulse_payload::{PayloadError, parse_classification};
