use crate::error::CatalogError;
use serde_json::{json, Value};

/// JSON Schema for the search payload envelope.
/// Only the containers are constrained; record contents are normalized leniently.
pub fn payload_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "searchResult": {
                "type": ["object", "null"],
                "properties": {
                    "records": {
                        "type": ["array", "null"],
                        "items": {"type": "object"}
                    }
                }
            }
        }
    })
}

/// Validate a search payload against [`payload_schema`]
/// The first violation becomes a structural error located at its instance path
pub fn validate_payload(data: &Value) -> Result<(), CatalogError> {
    let compiled = jsonschema::validator_for(&payload_schema())
        .map_err(|e| CatalogError::structural("schema", format!("Schema compilation error: {}", e)))?;

    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(CatalogError::structural(location, error.to_string()))
        }
    }
}
