use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use birdcall::application::ports::{ClassificationService, SpeciesRepository};
use birdcall::application::services::{
    IdentificationResolver, IdentificationService, RelayService, WindowPreparer,
};
use birdcall::domain::ModelProperties;
use birdcall::infrastructure::audio::SymphoniaAudioDecoder;
use birdcall::infrastructure::classification::EdgeImpulseClient;
use birdcall::infrastructure::inference::InferenceModuleFactory;
use birdcall::infrastructure::observability::{TracingConfig, init_tracing, mask_secret};
use birdcall::infrastructure::species::StaticSpeciesCatalog;
use birdcall::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.to_string(),
        settings.logging.json,
    ));

    let catalog = match &settings.identification.species_file {
        Some(path) => StaticSpeciesCatalog::from_file(path),
        None => StaticSpeciesCatalog::embedded(),
    }
    .context("Failed to load species catalog")?;
    let labels = catalog.labels();
    let species_repository: Arc<dyn SpeciesRepository> = Arc::new(catalog);

    if settings.relay.api_key.is_empty() || settings.relay.project_id.is_empty() {
        tracing::warn!("Classification relay is not fully configured; upstream calls will fail");
    }

    let client = Arc::new(EdgeImpulseClient::new(
        &settings.relay.base_url,
        &settings.relay.project_id,
        &settings.relay.api_key,
    ));
    tracing::info!(
        endpoint = client.endpoint(),
        api_key = %mask_secret(&settings.relay.api_key),
        "Classification relay configured"
    );

    let relay_service = Arc::new(RelayService::new(
        Arc::clone(&client),
        settings.relay.max_upload_bytes(),
    ));

    let window_config = settings.audio.window_config();
    let properties = ModelProperties {
        project_name: settings.inference.project_name.clone(),
        input_features_count: window_config.window_size,
        frequency: window_config.sample_rate,
        labels,
    };
    let classification_service: Arc<dyn ClassificationService> = client;
    let inference = InferenceModuleFactory::create(
        settings.inference.provider,
        properties,
        Some(classification_service),
    )?;
    inference.init().await?;
    tracing::info!(provider = ?settings.inference.provider, "Inference module ready");

    let identification_service = Arc::new(IdentificationService::new(
        Arc::new(SymphoniaAudioDecoder::new(window_config.sample_rate)),
        WindowPreparer::new(window_config),
        inference,
        IdentificationResolver::new(
            Arc::clone(&species_repository),
            settings.identification.min_confidence,
        ),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let state = AppState {
        relay_service,
        identification_service,
        species_repository,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
