//! Session-scoped holder of the current [`Catalog`].
//!
//! The store never mutates a catalog in place. Each load builds a fresh
//! catalog and swaps the shared snapshot, so readers holding an older
//! `Arc<Catalog>` keep seeing a consistent list.

use crate::error::CatalogError;
use crate::models::Catalog;
use crate::normalize::normalize;
use crate::schema_validation::validate_payload;
use crate::segments::BrandSegmentRegistry;
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

pub const RECORDS_POINTER: &str = "/searchResult/records";

#[derive(Debug, Default)]
pub struct CatalogStore {
    current: Arc<Catalog>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize every record of `searchResult.records`, in source order.
    ///
    /// A missing or null container yields an empty catalog. A payload that is
    /// not an object, or whose containers have the wrong type, is rejected.
    pub fn load(payload: &Value, registry: &BrandSegmentRegistry) -> Result<Catalog, CatalogError> {
        validate_payload(payload)?;

        // The envelope is valid here: containers are absent, null or well typed
        let items: Vec<_> = payload
            .pointer(RECORDS_POINTER)
            .and_then(Value::as_array)
            .map(|records| {
                records
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|record| normalize(record, registry))
                    .collect()
            })
            .unwrap_or_default();

        debug!("Normalized {} records", items.len());
        Ok(Catalog::new(items))
    }

    /// Load a payload and make it current. On error the previous catalog stays.
    pub fn reload(
        &mut self,
        payload: &Value,
        registry: &BrandSegmentRegistry,
    ) -> Result<Arc<Catalog>, CatalogError> {
        let catalog = Self::load(payload, registry)?;
        self.replace(catalog);
        Ok(self.current())
    }

    pub fn replace(&mut self, catalog: Catalog) {
        info!("Catalog replaced ({} items)", catalog.len());
        self.current = Arc::new(catalog);
    }

    /// Snapshot of the current catalog.
    pub fn current(&self) -> Arc<Catalog> {
        Arc::clone(&self.current)
    }

    pub fn clear(&mut self) {
        self.current = Arc::new(Catalog::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "searchResult": {
                "records": [
                    {"p360item.X_item_name": "Phone X", "p360item.brand": "Apple"},
                    {"p360item.X_item_name": "Sofa Y", "p360item.brand": "Bartira"}
                ]
            }
        })
    }

    #[test]
    fn test_load_preserves_source_order() {
        let catalog = CatalogStore::load(&payload(), &BrandSegmentRegistry::builtin()).unwrap();
        assert_eq!(catalog.names(), vec!["Phone X", "Sofa Y"]);
    }

    #[test]
    fn test_missing_containers_yield_empty_catalog() {
        let registry = BrandSegmentRegistry::builtin();
        for payload in [
            json!({}),
            json!({"searchResult": null}),
            json!({"searchResult": {}}),
            json!({"searchResult": {"records": []}}),
            json!({"searchResult": {"records": null}}),
        ] {
            assert!(CatalogStore::load(&payload, &registry).unwrap().is_empty());
        }
    }

    #[test]
    fn test_structural_errors() {
        let registry = BrandSegmentRegistry::builtin();
        for payload in [
            json!("just a string"),
            json!([]),
            json!({"searchResult": []}),
            json!({"searchResult": {"records": "nope"}}),
            json!({"searchResult": {"records": [1]}}),
        ] {
            let err = CatalogStore::load(&payload, &registry).unwrap_err();
            assert!(err.is_structural(), "expected structural error for {}", payload);
        }
    }

    #[test]
    fn test_structural_error_points_at_offending_container() {
        let registry = BrandSegmentRegistry::builtin();
        for (payload, expected) in [
            (json!("just a string"), "root"),
            (json!({"searchResult": 7}), "/searchResult"),
            (json!({"searchResult": {"records": "nope"}}), "/searchResult/records"),
            (json!({"searchResult": {"records": [{}, {}, 1]}}), "/searchResult/records/2"),
        ] {
            match CatalogStore::load(&payload, &registry).unwrap_err() {
                CatalogError::Structural { location, .. } => assert_eq!(location, expected),
                other => panic!("expected structural error for {}, got {:?}", payload, other),
            }
        }
    }

    #[test]
    fn test_loading_twice_gives_equal_independent_catalogs() {
        let registry = BrandSegmentRegistry::builtin();
        let first = CatalogStore::load(&payload(), &registry).unwrap();
        let second = CatalogStore::load(&payload(), &registry).unwrap();
        assert_eq!(first, second);
        assert!(!std::ptr::eq(first.items().as_ptr(), second.items().as_ptr()));
    }

    #[test]
    fn test_reload_replaces_wholesale() {
        let registry = BrandSegmentRegistry::builtin();
        let mut store = CatalogStore::new();
        assert!(store.current().is_empty());

        let before = store.reload(&payload(), &registry).unwrap();
        let after = store.reload(&payload(), &registry).unwrap();
        assert_eq!(after.len(), 2);
        assert!(!Arc::ptr_eq(&before, &after));
        // The earlier snapshot is untouched
        assert_eq!(before.len(), 2);
    }

    #[test]
    fn test_failed_reload_keeps_previous_catalog() {
        let registry = BrandSegmentRegistry::builtin();
        let mut store = CatalogStore::new();
        store.reload(&payload(), &registry).unwrap();

        assert!(store.reload(&json!(42), &registry).is_err());
        assert_eq!(store.current().len(), 2);

        store.clear();
        assert!(store.current().is_empty());
    }
}
