use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::ClassificationService;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    classify_handler, get_bird_handler, health_handler, identify_handler, list_birds_handler,
};
use crate::presentation::state::AppState;

const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: ClassificationService + ?Sized + 'static,
{
    let cors = cors_layer(state.settings.cors.frontend_url.as_deref());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state
        .relay_service
        .max_upload_bytes()
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/classify", post(classify_handler::<C>))
        .route("/api/identify", post(identify_handler::<C>))
        .route("/api/birds", get(list_birds_handler::<C>))
        .route("/api/birds/{label}", get(get_bird_handler::<C>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let methods = [Method::GET, Method::POST];

    match frontend_url.and_then(|url| HeaderValue::from_str(url).ok()) {
        Some(origin) => CorsLayer::new()
            .allow_origin(AllowOrigin::list([origin]))
            .allow_methods(methods)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any),
    }
}
