pub mod client;
pub mod source;
pub mod types;

pub use client::P360Client;
pub use source::{ApiError, CatalogSource, Credentials, FileSource, Session};
