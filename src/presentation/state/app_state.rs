use std::sync::Arc;

use crate::application::ports::{ClassificationService, SpeciesRepository};
use crate::application::services::{IdentificationService, RelayService};
use crate::presentation::config::Settings;

pub struct AppState<C>
where
    C: ClassificationService + ?Sized,
{
    pub relay_service: Arc<RelayService<C>>,
    pub identification_service: Arc<IdentificationService>,
    pub species_repository: Arc<dyn SpeciesRepository>,
    pub settings: Settings,
}

impl<C> Clone for AppState<C>
where
    C: ClassificationService + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            relay_service: Arc::clone(&self.relay_service),
            identification_service: Arc::clone(&self.identification_service),
            species_repository: Arc::clone(&self.species_repository),
            settings: self.settings.clone(),
        }
    }
}
