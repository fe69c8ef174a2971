// Public modules
pub mod comparison;
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod models;
pub mod normalize;
pub mod pagination;
pub mod schema_validation;
pub mod segments;
pub mod sorting;
pub mod store;
pub mod validation;

// Re-export commonly used types for convenience
pub use comparison::{compare, select_by_names, MISSING_VALUE};
pub use error::CatalogError;
pub use filtering::{apply_filters, has_filters, matches_filters};
pub use grouping::{get_sorted_group_names, group_items, GroupField, UNSPECIFIED_GROUP};
pub use io::{load_payload, save_catalog, save_payload};
pub use models::{Attribute, Catalog, ComparisonResult, ComparisonRow, Filters, Item, ALL};
pub use normalize::normalize;
pub use pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use schema_validation::{payload_schema, validate_payload};
pub use segments::{BrandSegmentRegistry, FALLBACK_SEGMENT};
pub use sorting::{normalize_for_sorting, parse_price, sort_items, SortField};
pub use store::CatalogStore;
pub use validation::validate_catalog;
