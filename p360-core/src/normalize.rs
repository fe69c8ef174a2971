//! Conversion of raw P360 search records into [`Item`]s.
//!
//! Every lookup degrades to an empty value when a key is missing or holds
//! something unexpected. Only the payload envelope can fail, and that is
//! checked by [`crate::store`] before records reach this module.

use crate::models::{Attribute, Item};
use crate::segments::BrandSegmentRegistry;
use serde_json::{Map, Value};

pub const FIELD_NAME: &str = "p360item.X_item_name";
pub const FIELD_IMAGE_URL: &str = "p360item.X_imageUrl";
pub const FIELD_BRAND: &str = "p360item.brand";
pub const FIELD_DESCRIPTION: &str = "p360item.description";
pub const FIELD_SELLING_PRICE: &str = "p360item.sellingPrice";
pub const FIELD_ATTRIBUTES: &str = "p360item.X_attributes";

const SHORT_DESCRIPTION: &str = "shortDescription";
const LONG_DESCRIPTION: &str = "longDescription";
const PRICE_AMOUNT: &str = "sellingPriceAmount";
const ATTRIBUTE_NAME: &str = "X_name";
const ATTRIBUTE_VALUE: &str = "X_value";

/// Normalize one raw record.
pub fn normalize(record: &Map<String, Value>, registry: &BrandSegmentRegistry) -> Item {
    let brand = text_field(record, FIELD_BRAND);
    let segment = registry.segment_of(&brand).to_string();

    Item {
        name: text_field(record, FIELD_NAME),
        description: description(record),
        segment,
        brand,
        price: price(record),
        image_url: text_field(record, FIELD_IMAGE_URL),
        attributes: attributes(record),
    }
}

/// Render a scalar JSON value as display text.
/// Strings pass through, numbers and booleans use their JSON text, anything
/// else is absent.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text_field(record: &Map<String, Value>, key: &str) -> String {
    record.get(key).and_then(scalar_text).unwrap_or_default()
}

/// First object of a list-valued field, if any.
fn first_entry<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    record
        .get(key)
        .and_then(Value::as_array)
        .and_then(|list| list.first())
        .and_then(Value::as_object)
}

/// Short description, else long description, else empty.
fn description(record: &Map<String, Value>) -> String {
    let Some(entry) = first_entry(record, FIELD_DESCRIPTION) else {
        return String::new();
    };

    [SHORT_DESCRIPTION, LONG_DESCRIPTION]
        .iter()
        .filter_map(|key| entry.get(*key).and_then(scalar_text))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

fn price(record: &Map<String, Value>) -> String {
    first_entry(record, FIELD_SELLING_PRICE)
        .and_then(|entry| entry.get(PRICE_AMOUNT))
        .and_then(scalar_text)
        .unwrap_or_default()
}

/// One pair per source attribute object, so names and values stay aligned.
fn attributes(record: &Map<String, Value>) -> Vec<Attribute> {
    let Some(list) = record.get(FIELD_ATTRIBUTES).and_then(Value::as_array) else {
        return Vec::new();
    };

    list.iter()
        .map(|entry| match entry.as_object() {
            Some(obj) => Attribute {
                name: obj.get(ATTRIBUTE_NAME).and_then(scalar_text),
                value: obj.get(ATTRIBUTE_VALUE).and_then(scalar_text),
            },
            None => Attribute {
                name: None,
                value: None,
            },
        })
        .collect()
}
