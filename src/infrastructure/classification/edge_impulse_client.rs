use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{ClassificationService, ClassificationServiceError};
use crate::domain::AudioUpload;

pub const EDGE_IMPULSE_BASE_URL: &str = "https://studio.edgeimpulse.com";
const API_KEY_HEADER: &str = "x-api-key";

pub struct EdgeImpulseClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl EdgeImpulseClient {
    pub fn new(base_url: &str, project_id: &str, api_key: &str) -> Self {
        let endpoint = format!(
            "{}/v1/api/{}/classify",
            base_url.trim_end_matches('/'),
            project_id,
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: api_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ClassificationService for EdgeImpulseClient {
    async fn classify(
        &self,
        upload: &AudioUpload,
    ) -> Result<serde_json::Value, ClassificationServiceError> {
        let file_part = multipart::Part::bytes(upload.data.to_vec())
            .file_name(upload.file_name_or_default().to_string())
            .mime_str(upload.content_type_or_default())
            .map_err(|e| ClassificationServiceError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new().part("file", file_part);

        tracing::debug!(
            endpoint = %self.endpoint,
            bytes = upload.len(),
            "Sending audio to Edge Impulse"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                ClassificationServiceError::ApiRequestFailed(format!("request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ClassificationServiceError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            ClassificationServiceError::InvalidResponse(format!("parse response: {}", e))
        })?;

        tracing::info!("Edge Impulse classification completed");

        Ok(payload)
    }
}
