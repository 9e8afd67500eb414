use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;

use crate::domain::AudioUpload;

pub const AUDIO_FIELD: &str = "audio";
pub const NO_AUDIO_MESSAGE: &str = "No audio file provided";

/// Returns the first `audio` file part of the form; other fields are skipped.
pub async fn read_audio_field(
    multipart: &mut Multipart,
) -> Result<Option<AudioUpload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        // A plain form value named `audio` is not a file.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            tracing::debug!("Ignoring audio field without a file name");
            continue;
        };
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        tracing::debug!(
            file_name = %file_name,
            content_type = ?content_type,
            bytes = data.len(),
            "Audio upload received"
        );

        return Ok(Some(AudioUpload {
            data,
            file_name: Some(file_name),
            content_type,
        }));
    }

    Ok(None)
}
