use serde::Serialize;

use super::label::Label;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelProperties {
    pub project_name: String,
    pub input_features_count: usize,
    pub frequency: u32,
    pub labels: Vec<Label>,
}
