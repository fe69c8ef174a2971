use serde::{Deserialize, Serialize};

/// Sentinel used by selection controls to mean "no filter applied".
pub const ALL: &str = "All";

/// One name/value pair from a product's attribute list.
/// Either side may be missing in the source record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// A normalized product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub segment: String,
    /// Display value only; the source may hold anything here.
    pub price: String,
    pub image_url: String,
    pub attributes: Vec<Attribute>,
}

impl Item {
    /// Value of the first attribute with this exact name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.as_deref() == Some(name))
            .and_then(|attr| attr.value.as_deref())
    }
}

/// Ordered list of items for one session, keyed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Position of the first item with this exact name.
    /// Names are not unique, so later duplicates are never returned.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.position_by_name(name).and_then(|idx| self.items.get(idx))
    }

    /// Item names in catalog order, duplicates included.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

/// Active name/segment/brand filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub name_query: String,
    pub segment: String,
    pub brand: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            name_query: String::new(),
            segment: ALL.to_string(),
            brand: ALL.to_string(),
        }
    }
}

/// One labelled row of a comparison table, one value per selected item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

/// Side-by-side view of 2 to 4 items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Column keys, one per selected item, unique within the result.
    pub columns: Vec<String>,
    /// Rows `Name`, `Brand`, `Segment`, `Price`.
    pub summary: Vec<ComparisonRow>,
    /// Outer join of every item's attributes, keyed by attribute name.
    pub attributes: Vec<ComparisonRow>,
}

impl ComparisonResult {
    pub fn attribute_row(&self, label: &str) -> Option<&ComparisonRow> {
        self.attributes.iter().find(|row| row.label == label)
    }
}
