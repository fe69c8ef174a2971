use async_trait::async_trait;
use p360_core::{load_payload, CatalogError};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while authenticating or fetching the raw payload.
/// All of them are distinct from an empty catalog.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Login rejected or credentials missing.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Network-level failure (timeout, DNS, connection refused).
    #[error("network error: {0}")]
    Network(String),

    /// API returned a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Payload could not be read, or is not shaped like a catalog.
    /// Covers both the offline file and the live search response.
    #[error("payload error: {0}")]
    Payload(#[from] CatalogError),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Parse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque credential handed from authentication to fetch.
#[derive(Clone)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub org_name: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .field("org_name", &self.org_name)
            .finish()
    }
}

/// Where the raw search payload comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source, for logs and status lines.
    fn name(&self) -> &str;

    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, ApiError>;

    /// Returns the payload shaped as `{ searchResult: { records: [...] } }`.
    async fn fetch(&self, session: &Session) -> Result<Value, ApiError>;
}

/// Payload previously saved to disk. Authentication always succeeds.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        Ok(Session {
            token: String::new(),
            username: credentials.username.clone(),
            org_name: self.path.display().to_string(),
        })
    }

    async fn fetch(&self, _session: &Session) -> Result<Value, ApiError> {
        Ok(load_payload(&self.path)?)
    }
}
