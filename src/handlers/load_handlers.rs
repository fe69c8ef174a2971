use anyhow::{Context, Result};
use std::path::Path;

use crate::operations::CatalogOperations;
use crate::state::SessionState;
use crate::ui::{set_status, StatusLevel};

/// Load the catalog into the session, from a payload file or the API
pub async fn load_catalog(state: &mut SessionState, payload: Option<&Path>) -> Result<()> {
    let count = CatalogOperations::new(state, payload)
        .load()
        .await
        .context("could not load catalog")?;

    if let Some(identity) = state.identity_line() {
        set_status(identity, StatusLevel::Info);
    }
    set_status(format!("Loaded {} items", count), StatusLevel::Success);
    Ok(())
}
