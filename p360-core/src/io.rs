use crate::error::CatalogError;
use crate::models::Catalog;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a raw search payload from a JSON file
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<Value, CatalogError> {
    let contents = fs::read_to_string(path)?;
    let payload: Value = serde_json::from_str(&contents)?;
    Ok(payload)
}

/// Save a raw search payload to a JSON file with pretty printing
pub fn save_payload<P: AsRef<Path>>(payload: &Value, path: P) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(payload)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save a normalized catalog to a JSON file with pretty printing
pub fn save_catalog<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
