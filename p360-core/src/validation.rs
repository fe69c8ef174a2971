use crate::models::Catalog;
use crate::segments::BrandSegmentRegistry;
use crate::sorting::parse_price;
use std::collections::{BTreeSet, HashMap};

/// Report data-quality issues in a loaded catalog
/// Returns Ok(()) if clean, or Err(Vec<String>) with one message per issue
///
/// None of these stop the catalog from being browsed; they explain why an
/// item may be hard to find, select, or compare.
pub fn validate_catalog(catalog: &Catalog, registry: &BrandSegmentRegistry) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut unregistered: BTreeSet<&str> = BTreeSet::new();

    for (idx, item) in catalog.items().iter().enumerate() {
        let item_ref = format!("Item #{} ('{}')", idx + 1, item.name);

        if item.name.trim().is_empty() {
            errors.push(format!("{}: name is empty", item_ref));
        } else if let Some(first) = first_seen.get(item.name.as_str()) {
            errors.push(format!(
                "{}: duplicate name, selection by name resolves to item #{}",
                item_ref,
                first + 1
            ));
        } else {
            first_seen.insert(item.name.as_str(), idx);
        }

        if !item.brand.is_empty() && !registry.is_registered(&item.brand) {
            unregistered.insert(item.brand.as_str());
        }

        if !item.price.is_empty() && parse_price(&item.price).is_none() {
            errors.push(format!("{}: price '{}' is not numeric", item_ref, item.price));
        }

        let unnamed = item.attributes.iter().filter(|attr| attr.name.is_none()).count();
        if unnamed > 0 {
            errors.push(format!("{}: {} attribute(s) without a name", item_ref, unnamed));
        }
    }

    for brand in unregistered {
        errors.push(format!(
            "Brand '{}' has no segment mapping, its items fall under '{}'",
            brand,
            registry.segment_of(brand)
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
