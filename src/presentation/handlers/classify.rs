use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::ClassificationService;
use crate::application::services::RelayError;
use crate::presentation::state::AppState;

use super::error_response::error_response;
use super::upload::{NO_AUDIO_MESSAGE, read_audio_field};

const CLASSIFY_FAILED_MESSAGE: &str = "Failed to classify audio";

#[tracing::instrument(skip(state, multipart))]
pub async fn classify_handler<C>(
    State(state): State<AppState<C>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    C: ClassificationService + ?Sized + 'static,
{
    let Ok(mut multipart) = multipart else {
        tracing::warn!("Classify request without multipart body");
        return error_response(StatusCode::BAD_REQUEST, NO_AUDIO_MESSAGE);
    };

    let upload = match read_audio_field(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!("Classify request with no audio file");
            return error_response(StatusCode::BAD_REQUEST, NO_AUDIO_MESSAGE);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                e.status(),
                format!("Failed to read multipart: {}", e.body_text()),
            );
        }
    };

    match state.relay_service.forward(&upload).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(RelayError::EmptyUpload) => error_response(StatusCode::BAD_REQUEST, NO_AUDIO_MESSAGE),
        Err(e @ RelayError::TooLarge { .. }) => {
            tracing::warn!(error = %e, "Rejected oversized upload");
            error_response(StatusCode::PAYLOAD_TOO_LARGE, "Audio file too large")
        }
        Err(RelayError::Upstream(e)) => {
            tracing::error!(error = %e, "Classification error");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, CLASSIFY_FAILED_MESSAGE)
        }
    }
}
