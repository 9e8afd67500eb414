use serde::Deserialize;

use crate::domain::{ClassificationResult, ClassificationSet, ClassificationSetError};

/// Accepted payload shapes: the studio API nests a `label -> score` map under
/// `result.classification`, the embedded runtime returns a `results` list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Listed {
        results: Vec<ClassificationResult>,
        #[serde(default)]
        anomaly: Option<f32>,
    },
    Keyed {
        result: KeyedResult,
    },
    Failed {
        error: String,
    },
}

#[derive(Deserialize)]
struct KeyedResult {
    // Payload order is kept so ties resolve to the label listed first.
    classification: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    anomaly: Option<f32>,
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("unrecognized classification payload: {0}")]
    Malformed(String),
    #[error("classifier reported an error: {0}")]
    Rejected(String),
    #[error(transparent)]
    InvalidSet(#[from] ClassificationSetError),
}

pub fn parse_classification(
    payload: &serde_json::Value,
) -> Result<ClassificationSet, PayloadError> {
    let parsed =
        Payload::deserialize(payload).map_err(|e| PayloadError::Malformed(e.to_string()))?;

    let (results, anomaly) = match parsed {
        Payload::Listed { results, anomaly } => (results, anomaly),
        Payload::Keyed { result } => (keyed_results(result.classification)?, result.anomaly),
        Payload::Failed { error } => return Err(PayloadError::Rejected(error)),
    };

    let set = ClassificationSet::new(results)?;
    Ok(match anomaly {
        Some(a) => set.with_anomaly(a),
        None => set,
    })
}

fn keyed_results(
    classification: serde_json::Map<String, serde_json::Value>,
) -> Result<Vec<ClassificationResult>, PayloadError> {
    classification
        .into_iter()
        .map(|(label, value)| match value.as_f64() {
            Some(score) => Ok(ClassificationResult::new(label, score as f32)),
            None => Err(PayloadError::Malformed(format!(
                "score for {} is not a number: {}",
                label, value
            ))),
        })
        .collect()
}
