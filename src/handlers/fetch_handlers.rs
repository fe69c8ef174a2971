use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::FetchArgs;
use crate::operations::CatalogOperations;
use crate::state::SessionState;
use crate::ui::{set_status, StatusLevel};

/// `fetch`: log in, download the catalog and save it
pub async fn handle_fetch(state: &mut SessionState, payload: Option<&Path>, args: &FetchArgs) -> Result<()> {
    let count = CatalogOperations::new(state, payload)
        .fetch_to_file(&args.out, args.normalized)
        .await
        .with_context(|| format!("fetch to {} failed", args.out.display()))?;

    let what = if args.normalized { "catalog" } else { "payload" };
    set_status(
        format!("Saved {} with {} items to {}", what, count, args.out.display()),
        StatusLevel::Success,
    );
    Ok(())
}
