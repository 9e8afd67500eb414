use std::sync::Arc;

use serde_json::json;

use birdcall::application::ports::{ClassificationService, InferenceError, InferenceModule};
use birdcall::domain::{AudioWindow, ClassificationResult, Label, ModelProperties};
use birdcall::infrastructure::inference::{
    InferenceModuleFactory, InferenceProvider, RelayInferenceModule, ScaffoldInferenceModule,
};

use crate::helpers::CountingClassificationService;

const WINDOW: usize = 16;

fn properties(labels: &[&str]) -> ModelProperties {
    ModelProperties {
        project_name: "birdcall-test".to_string(),
        input_features_count: WINDOW,
        frequency: 8_000,
        labels: labels.iter().map(|l| Label::new(*l)).collect(),
    }
}

fn window(len: usize) -> AudioWindow {
    let samples = (0..len).map(|i| if i % 2 == 0 { 0.5 } else { -1.0 }).collect();
    AudioWindow::new(samples, 8_000).unwrap()
}

#[tokio::test]
async fn given_uninitialized_module_when_classifying_then_returns_not_initialized() {
    let module = ScaffoldInferenceModule::with_leading_label(properties(&["sum"]));

    let result = module.classify(&window(WINDOW)).await;

    assert!(matches!(result, Err(InferenceError::NotInitialized)));
    assert!(matches!(module.properties(), Err(InferenceError::NotInitialized)));
}

#[tokio::test]
async fn given_module_initialized_twice_when_reading_properties_then_returns_model_properties() {
    let module = ScaffoldInferenceModule::with_leading_label(properties(&["sum", "sivigaleb"]));

    module.init().await.unwrap();
    module.init().await.unwrap();

    assert_eq!(module.properties().unwrap(), properties(&["sum", "sivigaleb"]));
}

#[tokio::test]
async fn given_window_of_wrong_length_when_classifying_then_returns_size_mismatch() {
    let module = ScaffoldInferenceModule::with_leading_label(properties(&["sum"]));
    module.init().await.unwrap();

    let result = module.classify(&window(WINDOW - 1)).await;

    assert!(matches!(
        result,
        Err(InferenceError::InputSizeMismatch {
            expected: WINDOW,
            got: 15
        })
    ));
}

#[tokio::test]
async fn given_leading_label_scaffold_when_classifying_then_first_label_wins() {
    let module = ScaffoldInferenceModule::with_leading_label(properties(&[
        "maliponirek",
        "sivigaleb",
        "recnigaleb",
    ]));
    module.init().await.unwrap();

    let set = module.classify(&window(WINDOW)).await.unwrap();

    assert_eq!(set.len(), 3);
    let top = set.top().unwrap();
    assert_eq!(top.label.as_str(), "maliponirek");
    assert!((top.value - 0.85).abs() < 1e-6);
    let total: f32 = set.results().iter().map(|r| r.value).sum();
    assert!((total - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn given_fixed_scores_when_classifying_then_returns_them_in_order() {
    let module = ScaffoldInferenceModule::new(
        properties(&["sum", "sivigaleb"]),
        vec![
            ClassificationResult::new("sum", 0.3),
            ClassificationResult::new("sivigaleb", 0.7),
        ],
    );
    module.init().await.unwrap();

    let set = module.classify(&window(WINDOW)).await.unwrap();

    assert_eq!(set.results()[0].label.as_str(), "sum");
    assert_eq!(set.top().map(|r| r.label.as_str()), Some("sivigaleb"));
}

#[tokio::test]
async fn given_relay_module_when_classifying_then_sends_window_as_wav_and_parses_reply() {
    let service = CountingClassificationService::answering(json!({
        "success": true,
        "result": { "classification": { "recnigaleb": 0.66, "sum": 0.34 }, "anomaly": 0.1 }
    }));
    let module = RelayInferenceModule::new(service.clone(), properties(&["recnigaleb", "sum"]));
    module.init().await.unwrap();

    let set = module.classify(&window(WINDOW)).await.unwrap();

    assert_eq!(set.top().map(|r| r.label.as_str()), Some("recnigaleb"));
    assert_eq!(set.anomaly(), Some(0.1));

    let upload = service.last_upload().unwrap();
    assert_eq!(upload.file_name.as_deref(), Some("window.wav"));
    assert_eq!(upload.content_type.as_deref(), Some("audio/wav"));
    let reader = hound::WavReader::new(&upload.data[..]).unwrap();
    assert_eq!(reader.spec().sample_rate, 8_000);
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.len() as usize, WINDOW);
}

#[tokio::test]
async fn given_unrecognized_relay_reply_when_classifying_then_returns_malformed_payload() {
    let service = CountingClassificationService::answering(json!({ "unexpected": true }));
    let module = RelayInferenceModule::new(service, properties(&["sum"]));
    module.init().await.unwrap();

    let result = module.classify(&window(WINDOW)).await;

    assert!(matches!(result, Err(InferenceError::MalformedPayload(_))));
}

#[tokio::test]
async fn given_failing_relay_service_when_classifying_then_returns_classification_failed() {
    let module = RelayInferenceModule::new(
        CountingClassificationService::failing(),
        properties(&["sum"]),
    );
    module.init().await.unwrap();

    let result = module.classify(&window(WINDOW)).await;

    assert!(matches!(result, Err(InferenceError::ClassificationFailed(_))));
}

#[tokio::test]
async fn given_relay_provider_without_service_when_creating_then_fails_initialization() {
    let result =
        InferenceModuleFactory::create(InferenceProvider::Relay, properties(&["sum"]), None);

    assert!(matches!(result, Err(InferenceError::InitializationFailed(_))));
}

#[tokio::test]
async fn given_relay_provider_with_service_when_creating_then_classifies_through_service() {
    let counting = CountingClassificationService::answering(json!({
        "results": [{ "label": "sum", "value": 0.9 }]
    }));
    let service: Arc<dyn ClassificationService> = counting.clone();

    let module = InferenceModuleFactory::create(
        InferenceProvider::Relay,
        properties(&["sum"]),
        Some(service),
    )
    .unwrap();
    module.init().await.unwrap();
    module.classify(&window(WINDOW)).await.unwrap();

    assert_eq!(counting.calls(), 1);
}

#[tokio::test]
async fn given_default_provider_when_creating_then_builds_scaffold() {
    let module =
        InferenceModuleFactory::create(InferenceProvider::default(), properties(&["sum"]), None)
            .unwrap();
    module.init().await.unwrap();

    let set = module.classify(&window(WINDOW)).await.unwrap();

    assert_eq!(set.top().map(|r| r.label.as_str()), Some("sum"));
}
