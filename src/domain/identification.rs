use serde::Serialize;

use super::label::Label;
use super::species::SpeciesRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub label: Label,
    pub confidence: f32,
    pub confidence_percent: u8,
    pub species: SpeciesRecord,
    pub alternatives: Vec<AlternativePrediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativePrediction {
    pub label: Label,
    pub confidence_percent: u8,
}

pub fn confidence_percent(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 100.0).round() as u8
}
