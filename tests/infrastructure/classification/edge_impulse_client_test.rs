use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use birdcall::application::ports::{ClassificationService, ClassificationServiceError};
use birdcall::domain::AudioUpload;
use birdcall::infrastructure::classification::EdgeImpulseClient;

#[derive(Debug, Default, Clone)]
struct CapturedRequest {
    api_key: Option<String>,
    field_name: Option<String>,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    status: u16,
    body: &'static str,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
}

async fn mock_classify(
    State(state): State<MockState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut captured = CapturedRequest {
        api_key: headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        ..Default::default()
    };

    if let Ok(Some(field)) = multipart.next_field().await {
        captured.field_name = field.name().map(String::from);
        captured.file_name = field.file_name().map(String::from);
        captured.content_type = field.content_type().map(String::from);
        captured.data = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
    }

    *state.captured.lock().unwrap() = Some(captured);

    let status = StatusCode::from_u16(state.status).unwrap();
    (
        status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        state.body,
    )
        .into_response()
}

async fn start_mock_edge_impulse(
    response_status: u16,
    response_body: &'static str,
) -> (String, Arc<Mutex<Option<CapturedRequest>>>, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured = Arc::new(Mutex::new(None));

    let app = Router::new()
        .route("/v1/api/{project_id}/classify", post(mock_classify))
        .with_state(MockState {
            status: response_status,
            body: response_body,
            captured: Arc::clone(&captured),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

#[test]
fn given_base_url_with_trailing_slash_when_creating_client_then_builds_classify_endpoint() {
    let client = EdgeImpulseClient::new("https://studio.edgeimpulse.com/", "42", "key");

    assert_eq!(
        client.endpoint(),
        "https://studio.edgeimpulse.com/v1/api/42/classify"
    );
}

#[tokio::test]
async fn given_upload_when_classifying_then_forwards_file_with_api_key_and_returns_json_verbatim() {
    let body = r#"{"success":true,"result":{"classification":{"sum":0.92,"sivigaleb":0.08}}}"#;
    let (base_url, captured, shutdown_tx) = start_mock_edge_impulse(200, body).await;

    let client = EdgeImpulseClient::new(&base_url, "12345", "ei_test_key");
    let upload = AudioUpload::new(b"webm bytes".to_vec())
        .with_file_name("recording.webm")
        .with_content_type("audio/webm");

    let result = client.classify(&upload).await.unwrap();

    let expected: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(result, expected);

    let request = captured.lock().unwrap().clone().unwrap();
    assert_eq!(request.api_key.as_deref(), Some("ei_test_key"));
    assert_eq!(request.field_name.as_deref(), Some("file"));
    assert_eq!(request.file_name.as_deref(), Some("recording.webm"));
    assert_eq!(request.content_type.as_deref(), Some("audio/webm"));
    assert_eq!(request.data, b"webm bytes");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_upload_without_metadata_when_classifying_then_uses_webm_defaults() {
    let (base_url, captured, shutdown_tx) = start_mock_edge_impulse(200, r#"{"results":[]}"#).await;

    let client = EdgeImpulseClient::new(&base_url, "1", "key");
    let upload = AudioUpload::new(b"raw".to_vec());

    client.classify(&upload).await.unwrap();

    let request = captured.lock().unwrap().clone().unwrap();
    assert_eq!(request.file_name.as_deref(), Some("audio.webm"));
    assert_eq!(request.content_type.as_deref(), Some("audio/webm"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_upstream_error_status_when_classifying_then_returns_upstream_status_error() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_edge_impulse(401, r#"{"success":false,"error":"Invalid API key"}"#).await;

    let client = EdgeImpulseClient::new(&base_url, "1", "wrong");
    let upload = AudioUpload::new(b"raw".to_vec());

    let result = client.classify(&upload).await;

    assert!(matches!(
        result,
        Err(ClassificationServiceError::UpstreamStatus { status: 401, .. })
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_body_when_classifying_then_returns_invalid_response() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_edge_impulse(200, "<html>oops</html>").await;

    let client = EdgeImpulseClient::new(&base_url, "1", "key");
    let upload = AudioUpload::new(b"raw".to_vec());

    let result = client.classify(&upload).await;

    assert!(matches!(
        result,
        Err(ClassificationServiceError::InvalidResponse(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_endpoint_when_classifying_then_returns_request_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = EdgeImpulseClient::new(&format!("http://{}", addr), "1", "key");
    let upload = AudioUpload::new(b"raw".to_vec());

    let result = client.classify(&upload).await;

    assert!(matches!(
        result,
        Err(ClassificationServiceError::ApiRequestFailed(_))
    ));
}
