use serde_json::Value;

use crate::core::models::{RawApiResponse, SearchError, ValidatedEntry};

/// Parses the search API's JSON payload into entries ready for materialization.
pub struct ResultDecoder;

impl ResultDecoder {
    /// Fails only when the payload is not JSON or its top level has the wrong
    /// shape. Incomplete entries are dropped without an error.
    pub fn decode(payload: &[u8]) -> Result<Vec<ValidatedEntry>, SearchError> {
        let value: Value = serde_json::from_slice(payload)
            .map_err(|error| SearchError::Decode(format!("invalid JSON: {}", error)))?;

        Self::check_top_level_shape(&value)?;

        let response: RawApiResponse = serde_json::from_value(value)
            .map_err(|error| SearchError::Decode(error.to_string()))?;

        let raw_items = response.item.unwrap_or_default();
        let raw_count = raw_items.len();

        let entries: Vec<ValidatedEntry> = raw_items
            .into_iter()
            .filter_map(ValidatedEntry::from_raw)
            .collect();

        log::debug!(
            "[DECODER] {} of {} entries are complete",
            entries.len(),
            raw_count
        );

        Ok(entries)
    }

    fn check_top_level_shape(value: &Value) -> Result<(), SearchError> {
        let object = value
            .as_object()
            .ok_or_else(|| SearchError::Decode("top-level value is not an object".to_string()))?;

        match object.get("item") {
            None | Some(Value::Null) => Ok(()),
            Some(Value::Array(items)) if items.iter().all(Value::is_object) => Ok(()),
            Some(Value::Array(_)) => Err(SearchError::Decode(
                "`item` contains a non-object entry".to_string(),
            )),
            Some(_) => Err(SearchError::Decode("`item` is not an array".to_string())),
        }
    }
}
