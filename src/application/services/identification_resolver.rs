use std::sync::Arc;

use crate::application::ports::SpeciesRepository;
use crate::domain::{
    AlternativePrediction, ClassificationSet, Identification, Label, confidence_percent,
};

pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.1;
pub const MAX_ALTERNATIVES: usize = 3;

pub struct IdentificationResolver {
    species: Arc<dyn SpeciesRepository>,
    min_confidence: f32,
}

impl IdentificationResolver {
    pub fn new(species: Arc<dyn SpeciesRepository>, min_confidence: f32) -> Self {
        Self {
            species,
            min_confidence,
        }
    }

    pub fn resolve(&self, set: &ClassificationSet) -> Result<Identification, IdentificationError> {
        let top = set.top().ok_or(IdentificationError::NoPredictions)?;

        if top.value < self.min_confidence {
            tracing::debug!(label = %top.label, value = top.value, "Top confidence too low");
            return Err(IdentificationError::LowConfidence {
                label: top.label.clone(),
                value: top.value,
                threshold: self.min_confidence,
            });
        }

        let species = self.species.find_by_label(&top.label).ok_or_else(|| {
            tracing::warn!(label = %top.label, "Species not found for label");
            IdentificationError::UnknownSpecies(top.label.clone())
        })?;

        let alternatives = set
            .ranked()
            .into_iter()
            .filter(|r| r.label != top.label)
            .take(MAX_ALTERNATIVES)
            .map(|r| AlternativePrediction {
                label: r.label.clone(),
                confidence_percent: confidence_percent(r.value),
            })
            .collect();

        tracing::info!(
            label = %top.label,
            species = %species.name,
            confidence = top.value,
            "Species identified"
        );

        Ok(Identification {
            label: top.label.clone(),
            confidence: top.value,
            confidence_percent: confidence_percent(top.value),
            species: species.clone(),
            alternatives,
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentificationError {
    #[error("no predictions in classification")]
    NoPredictions,
    #[error("top prediction {label} at {value} is below threshold {threshold}")]
    LowConfidence {
        label: Label,
        value: f32,
        threshold: f32,
    },
    #[error("no species record for label {0}")]
    UnknownSpecies(Label),
}
