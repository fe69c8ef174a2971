use p360_core::CatalogError;
use std::path::Path;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::operations::WriteError;

/// Map login/fetch/load errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_error(error: &ApiError) -> (String, String, String) {
    match error {
        ApiError::Auth(body) => (
            "Authentication Failed".to_string(),
            "Could not log in to Product 360.".to_string(),
            if body.trim().is_empty() {
                "Check the username and password and try again.".to_string()
            } else {
                body.clone()
            },
        ),
        ApiError::Network(msg) => (
            "Connection Error".to_string(),
            "Could not reach the Product 360 service.".to_string(),
            msg.clone(),
        ),
        ApiError::Http { status, message } => (
            "Service Error".to_string(),
            format!("The catalog request failed with HTTP {}.", status),
            message.clone(),
        ),
        ApiError::Parse(msg) => (
            "Invalid Response".to_string(),
            "The service returned something that is not a catalog.".to_string(),
            msg.clone(),
        ),
        ApiError::Payload(inner) => map_catalog_error(inner),
    }
}

fn map_catalog_error(error: &CatalogError) -> (String, String, String) {
    match error {
        CatalogError::Structural { location, message } => (
            "Malformed Catalog".to_string(),
            "Could not load catalog: the payload has an unexpected shape.".to_string(),
            format!("{} ({})", message, location),
        ),
        CatalogError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The payload file could not be found.".to_string(),
            e.to_string(),
        ),
        CatalogError::Io(e) => (
            "Error Loading File".to_string(),
            "Failed to read the payload file.".to_string(),
            e.to_string(),
        ),
        CatalogError::Json(e) => (
            "Invalid JSON".to_string(),
            "The payload file is not valid JSON.".to_string(),
            e.to_string(),
        ),
        CatalogError::InvalidSelection { .. } => map_compare_error(error),
    }
}

/// Map comparison errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_compare_error(error: &CatalogError) -> (String, String, String) {
    match error {
        CatalogError::InvalidSelection { selected } => (
            "Select Products".to_string(),
            "Pick between 2 and 4 different products to compare.".to_string(),
            format!("{} distinct product(s) matched the given names.", selected),
        ),
        other => map_catalog_error(other),
    }
}

/// Map output-file errors from `fetch` to user-friendly messages
/// Returns (title, message, details)
pub fn map_write_error(error: &WriteError) -> (String, String, String) {
    let details = match &error.source {
        CatalogError::Io(e) => e.to_string(),
        other => other.to_string(),
    };
    (
        "Error Saving File".to_string(),
        format!("Could not write {}.", error.path.display()),
        details,
    )
}

/// Map configuration errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_config_error(error: &ConfigError, path: Option<&Path>) -> (String, String, String) {
    let location = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.p360/config.toml".to_string());

    match error {
        ConfigError::Parse(e) => (
            "Invalid Configuration".to_string(),
            format!("Could not parse {}.", location),
            e.to_string(),
        ),
        ConfigError::Io(e) => (
            "Configuration Unreadable".to_string(),
            format!("Could not read {}.", location),
            e.to_string(),
        ),
    }
}
