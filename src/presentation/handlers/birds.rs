use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::ClassificationService;
use crate::domain::{Label, SpeciesRecord};
use crate::presentation::state::AppState;

use super::error_response::error_response;

pub async fn list_birds_handler<C>(State(state): State<AppState<C>>) -> Json<Vec<SpeciesRecord>>
where
    C: ClassificationService + ?Sized + 'static,
{
    Json(
        state
            .species_repository
            .list()
            .into_iter()
            .cloned()
            .collect(),
    )
}

pub async fn get_bird_handler<C>(
    State(state): State<AppState<C>>,
    Path(label): Path<String>,
) -> Response
where
    C: ClassificationService + ?Sized + 'static,
{
    match state.species_repository.find_by_label(&Label::new(label)) {
        Some(record) => (StatusCode::OK, Json(record.clone())).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Bird not found"),
    }
}
