use thiserror::Error;

/// Errors surfaced by the catalog pipeline.
///
/// Missing fields inside a record are never errors; they degrade to empty
/// values during normalization.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The payload envelope is not shaped as `{ searchResult: { records: [...] } }`.
    #[error("Malformed payload at {location}: {message}")]
    Structural { location: String, message: String },

    /// A comparison was requested with too few (or too many) resolved items.
    #[error("Comparison needs between 2 and 4 items, got {selected}")]
    InvalidSelection { selected: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn structural(location: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::Structural {
            location: location.into(),
            message: message.into(),
        }
    }

    /// True for errors caused by the shape of the payload rather than transport or disk.
    pub fn is_structural(&self) -> bool {
        matches!(self, CatalogError::Structural { .. } | CatalogError::Json(_))
    }
}
