use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::{ClassificationService, InferenceError};
use crate::application::services::IdentifyError;
use crate::presentation::state::AppState;

use super::error_response::error_response;
use super::upload::{NO_AUDIO_MESSAGE, read_audio_field};

#[tracing::instrument(skip(state, multipart))]
pub async fn identify_handler<C>(
    State(state): State<AppState<C>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    C: ClassificationService + ?Sized + 'static,
{
    let Ok(mut multipart) = multipart else {
        tracing::warn!("Identify request without multipart body");
        return error_response(StatusCode::BAD_REQUEST, NO_AUDIO_MESSAGE);
    };

    let upload = match read_audio_field(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!("Identify request with no audio file");
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

    match state.identification_service.identify(upload.data).await {
        Ok(identification) => (StatusCode::OK, Json(identification)).into_response(),
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Identification failed");
            } else {
                tracing::info!(error = %e, "Recording not identified");
            }
            error_response(status, e.user_message())
        }
    }
}

fn status_for(error: &IdentifyError) -> StatusCode {
    match error {
        IdentifyError::EmptyUpload => StatusCode::BAD_REQUEST,
        IdentifyError::Decoding(_) => StatusCode::UNPROCESSABLE_ENTITY,
        IdentifyError::Preparation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        IdentifyError::Inference(InferenceError::MalformedPayload(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        IdentifyError::Inference(_) => StatusCode::BAD_GATEWAY,
        IdentifyError::Resolution(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
