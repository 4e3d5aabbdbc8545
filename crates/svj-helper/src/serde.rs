use svj_core::errors::{ErrorInfo, SvjError};

use crate::helper::ModelSummary;

fn map_err(err: serde_json::Error, code: &str) -> SvjError {
    SvjError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a model summary to JSON.
pub fn summary_to_json(summary: &ModelSummary) -> Result<String, SvjError> {
    serde_json::to_string_pretty(summary).map_err(|err| map_err(err, "summary-serialize"))
}

/// Restores a model summary from JSON.
pub fn summary_from_json(json: &str) -> Result<ModelSummary, SvjError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "summary-deserialize"))
}
