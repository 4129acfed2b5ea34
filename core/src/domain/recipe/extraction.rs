use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

// Greedy: first '[' through last ']'.
static JSON_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("array pattern is valid"));

/// Locates the JSON array in free-form model output and decodes it.
///
/// Every failure maps to [`CoreError::UpstreamUnavailable`]; malformed JSON is
/// never repaired.
pub fn extract_recipe_array(text: &str) -> Result<Value, CoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::UpstreamUnavailable(
            "empty model response".to_string(),
        ));
    }

    let candidate = JSON_ARRAY.find(text).ok_or_else(|| {
        CoreError::UpstreamUnavailable("no JSON array in model response".to_string())
    })?;

    serde_json::from_str(candidate.as_str()).map_err(|e| {
        tracing::error!("Failed to decode recipe array: {}", e);
        CoreError::UpstreamUnavailable(format!("malformed recipe JSON: {}", e))
    })
}
