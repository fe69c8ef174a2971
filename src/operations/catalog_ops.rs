use log::info;
use p360_core::{save_catalog, save_payload, CatalogError};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::{ApiError, CatalogSource, Credentials, FileSource, P360Client, Session};
use crate::state::SessionState;
use crate::ui::{set_status, StatusLevel};

/// The fetched catalog could not be written to the output file
#[derive(Error, Debug)]
#[error("could not write {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    pub source: CatalogError,
}

/// Catalog loading orchestration
/// Picks the payload source, drives login and fetch, and reports progress
pub struct CatalogOperations<'a> {
    state: &'a mut SessionState,
    payload_file: Option<PathBuf>,
}

impl<'a> CatalogOperations<'a> {
    pub fn new(state: &'a mut SessionState, payload_file: Option<&Path>) -> Self {
        Self {
            state,
            payload_file: payload_file.map(Path::to_path_buf),
        }
    }

    /// Credentials from the resolved config; both are required for the API
    pub fn credentials(&self) -> Result<Credentials, ApiError> {
        let username = self.state.config.username.clone().unwrap_or_default();
        let password = self.state.config.password.clone().unwrap_or_default();
        if self.payload_file.is_none() && (username.is_empty() || password.is_empty()) {
            return Err(ApiError::Auth("username and password are required".to_string()));
        }
        Ok(Credentials { username, password })
    }

    fn source(&self) -> Box<dyn CatalogSource> {
        match &self.payload_file {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(P360Client::from_config(&self.state.config)),
        }
    }

    /// Authenticate, fetch and replace the session catalog
    pub async fn load(&mut self) -> Result<usize, ApiError> {
        let credentials = self.credentials()?;
        let source = self.source();
        if self.payload_file.is_none() {
            set_status("Authenticating...", StatusLevel::Info);
        }

        let catalog = self.state.login_and_load(&*source, &credentials).await?;
        info!("Loaded {} items from {}", catalog.len(), source.name());
        Ok(catalog.len())
    }

    /// Authenticate, fetch and write the payload to `out`
    /// With `normalized`, the catalog is written instead of the raw payload.
    /// Login and fetch failures are [`ApiError`]s, output failures are [`WriteError`]s.
    pub async fn fetch_to_file(&mut self, out: &Path, normalized: bool) -> anyhow::Result<usize> {
        let credentials = self.credentials()?;
        let source = self.source();

        let session: Session = source.authenticate(&credentials).await?;
        let payload = source.fetch(&session).await?;
        let catalog = self.state.load_payload(&payload).map_err(ApiError::from)?;
        self.state.session = Some(session);

        let written = if normalized {
            save_catalog(&catalog, out)
        } else {
            save_payload(&payload, out)
        };
        written.map_err(|source| WriteError {
            path: out.to_path_buf(),
            source,
        })?;
        info!("Wrote {} items to {}", catalog.len(), out.display());
        Ok(catalog.len())
    }
}
