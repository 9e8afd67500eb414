use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::label::Label;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Label,
    pub value: f32,
}

impl ClassificationResult {
    pub fn new(label: impl Into<Label>, value: f32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Unordered output of one inference call. Labels are unique and every
/// score lies in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassificationSet {
    results: Vec<ClassificationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anomaly: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassificationSetError {
    #[error("duplicate label in classification: {0}")]
    DuplicateLabel(Label),
    #[error("score for {label} out of range: {value}")]
    InvalidScore { label: Label, value: f32 },
}

impl ClassificationSet {
    pub fn new(results: Vec<ClassificationResult>) -> Result<Self, ClassificationSetError> {
        let mut seen = HashSet::with_capacity(results.len());

        for result in &results {
            if !result.value.is_finite() || !(0.0..=1.0).contains(&result.value) {
                return Err(ClassificationSetError::InvalidScore {
                    label: result.label.clone(),
                    value: result.value,
                });
            }
            if !seen.insert(&result.label) {
                return Err(ClassificationSetError::DuplicateLabel(result.label.clone()));
            }
        }

        Ok(Self {
            results,
            anomaly: None,
        })
    }

    pub fn with_anomaly(mut self, anomaly: f32) -> Self {
        self.anomaly = Some(anomaly);
        self
    }

    pub fn results(&self) -> &[ClassificationResult] {
        &self.results
    }

    pub fn anomaly(&self) -> Option<f32> {
        self.anomaly
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Highest-scoring entry. On ties the earliest entry wins.
    pub fn top(&self) -> Option<&ClassificationResult> {
        self.results.iter().fold(None, |best, current| match best {
            Some(b) if current.value <= b.value => Some(b),
            _ => Some(current),
        })
    }

    /// Entries ordered by descending score; ties keep their original order.
    pub fn ranked(&self) -> Vec<&ClassificationResult> {
        let mut ranked: Vec<&ClassificationResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
        ranked
    }
}
