use crate::models::{Filters, Item, ALL};

/// Apply filters to a list of items, returning only those that match
/// Relative order of the surviving items is preserved
pub fn apply_filters(items: &[Item], filters: &Filters) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches_filters(item, filters))
        .cloned()
        .collect()
}

/// Check if an item matches the given filters
/// AND logic between name, segment and brand
pub fn matches_filters(item: &Item, filters: &Filters) -> bool {
    // Name: case-insensitive substring
    if !filters.name_query.is_empty() {
        let query = filters.name_query.to_lowercase();
        if !item.name.to_lowercase().contains(&query) {
            return false;
        }
    }

    if filters.segment != ALL && item.segment != filters.segment {
        return false;
    }

    if filters.brand != ALL && item.brand != filters.brand {
        return false;
    }

    true
}

/// Check if any filter is active
pub fn has_filters(filters: &Filters) -> bool {
    !filters.name_query.is_empty() || filters.segment != ALL || filters.brand != ALL
}
