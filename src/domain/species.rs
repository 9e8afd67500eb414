use serde::{Deserialize, Serialize};

use super::label::Label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub name: String,
    pub scientific_name: String,
    pub sound_label: Label,
    pub description: String,
    pub habitat: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub audio_url: String,
}
