pub mod catalog_ops;

pub use catalog_ops::{CatalogOperations, WriteError};
