//! Side-by-side comparison of 2 to 4 catalog items.

use crate::error::CatalogError;
use crate::models::{Catalog, ComparisonResult, ComparisonRow, Item};
use std::collections::{HashMap, HashSet};

pub const MIN_SELECTION: usize = 2;
pub const MAX_SELECTION: usize = 4;

/// Rendered in place of a missing or empty attribute value.
pub const MISSING_VALUE: &str = "-";

pub const SUMMARY_LABELS: [&str; 4] = ["Name", "Brand", "Segment", "Price"];

/// Resolve selector names against a catalog.
///
/// Empty names and names with no match are skipped. Each name resolves to
/// its first match, and a position already selected is not selected twice.
pub fn select_by_names<'a, S: AsRef<str>>(catalog: &'a Catalog, names: &[S]) -> Vec<&'a Item> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !name.is_empty())
        .filter_map(|name| catalog.position_by_name(name))
        .filter(|idx| seen.insert(*idx))
        .filter_map(|idx| catalog.get(idx))
        .collect()
}

/// Build the summary and attribute tables for the selected items.
///
/// The same item passed more than once counts once. Distinct items that
/// share a name are still separate columns.
pub fn compare(selected: &[&Item]) -> Result<ComparisonResult, CatalogError> {
    let distinct = distinct_items(selected);
    if !(MIN_SELECTION..=MAX_SELECTION).contains(&distinct.len()) {
        return Err(CatalogError::InvalidSelection {
            selected: distinct.len(),
        });
    }

    Ok(ComparisonResult {
        columns: column_keys(&distinct),
        summary: summary_rows(&distinct),
        attributes: attribute_rows(&distinct),
    })
}

/// Selection with repeated references dropped, first occurrence kept.
fn distinct_items<'a>(selected: &[&'a Item]) -> Vec<&'a Item> {
    let mut distinct: Vec<&Item> = Vec::with_capacity(selected.len());
    for item in selected {
        if !distinct.iter().any(|seen| std::ptr::eq(*seen, *item)) {
            distinct.push(*item);
        }
    }
    distinct
}

/// Item names, with a `" (n)"` suffix on any name already used by an
/// earlier column. `n` is the 1-based selection index.
fn column_keys(selected: &[&Item]) -> Vec<String> {
    let mut used = HashSet::new();
    selected
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let key = if used.contains(&item.name) {
                format!("{} ({})", item.name, idx + 1)
            } else {
                item.name.clone()
            };
            used.insert(key.clone());
            key
        })
        .collect()
}

fn summary_rows(selected: &[&Item]) -> Vec<ComparisonRow> {
    let fields: [fn(&Item) -> &str; 4] = [
        |item| item.name.as_str(),
        |item| item.brand.as_str(),
        |item| item.segment.as_str(),
        |item| item.price.as_str(),
    ];

    SUMMARY_LABELS
        .iter()
        .zip(fields)
        .map(|(label, field)| ComparisonRow {
            label: label.to_string(),
            values: selected.iter().map(|item| field(item).to_string()).collect(),
        })
        .collect()
}

/// Full outer join on attribute name. Rows appear in first-seen order across
/// the items in selection order.
fn attribute_rows(selected: &[&Item]) -> Vec<ComparisonRow> {
    let mut labels: Vec<String> = Vec::new();
    let mut per_item: Vec<HashMap<String, String>> = Vec::with_capacity(selected.len());

    for item in selected {
        let mut values = HashMap::new();
        for attr in &item.attributes {
            let label = attr.name.clone().unwrap_or_default();
            if values.contains_key(&label) {
                continue;
            }
            if !labels.contains(&label) {
                labels.push(label.clone());
            }
            values.insert(label, attr.value.clone().unwrap_or_default());
        }
        per_item.push(values);
    }

    labels
        .into_iter()
        .map(|label| {
            let values = per_item
                .iter()
                .map(|values| match values.get(&label) {
                    Some(value) if !value.is_empty() => value.clone(),
                    _ => MISSING_VALUE.to_string(),
                })
                .collect();
            ComparisonRow { label, values }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribute;

    fn item(name: &str, attrs: &[(&str, &str)]) -> Item {
        Item {
            name: name.to_string(),
            description: String::new(),
            brand: "Apple".to_string(),
            segment: "Smartphones".to_string(),
            price: "999".to_string(),
            image_url: String::new(),
            attributes: attrs
                .iter()
                .map(|(n, v)| Attribute {
                    name: Some(n.to_string()),
                    value: Some(v.to_string()),
                })
                .collect(),
        }
    }

    fn row<'a>(result: &'a ComparisonResult, label: &str) -> Vec<&'a str> {
        result
            .attribute_row(label)
            .unwrap()
            .values
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_outer_join_fills_missing_values() {
        let first = item("One", &[("A", "1"), ("B", "2")]);
        let second = item("Two", &[("B", "3"), ("C", "4")]);

        let result = compare(&[&first, &second]).unwrap();
        let labels: Vec<_> = result.attributes.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(row(&result, "A"), vec!["1", "-"]);
        assert_eq!(row(&result, "B"), vec!["2", "3"]);
        assert_eq!(row(&result, "C"), vec!["-", "4"]);
    }

    #[test]
    fn test_summary_rows() {
        let first = item("One", &[]);
        let mut second = item("Two", &[]);
        second.brand = "Bartira".to_string();
        second.segment = "Móveis".to_string();
        second.price = String::new();

        let result = compare(&[&first, &second]).unwrap();
        assert_eq!(result.columns, vec!["One", "Two"]);
        let labels: Vec<_> = result.summary.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, SUMMARY_LABELS);
        assert_eq!(result.summary[1].values, vec!["Apple", "Bartira"]);
        assert_eq!(result.summary[2].values, vec!["Smartphones", "Móveis"]);
        assert_eq!(result.summary[3].values, vec!["999", ""]);
        assert!(result.attributes.is_empty());
    }

    #[test]
    fn test_outer_join_across_four_items() {
        let first = item("One", &[("Cor", "Preto")]);
        let second = item("Two", &[("Peso", "1kg"), ("Cor", "Azul")]);
        let third = item("Three", &[]);
        let fourth = item("Four", &[("Tela", "6.1"), ("Peso", "2kg")]);

        let result = compare(&[&first, &second, &third, &fourth]).unwrap();
        let labels: Vec<_> = result.attributes.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Cor", "Peso", "Tela"]);
        assert_eq!(row(&result, "Cor"), vec!["Preto", "Azul", "-", "-"]);
        assert_eq!(row(&result, "Peso"), vec!["-", "1kg", "-", "2kg"]);
        assert_eq!(row(&result, "Tela"), vec!["-", "-", "-", "6.1"]);
        assert!(result.summary.iter().all(|r| r.values.len() == 4));
    }

    #[test]
    fn test_selection_size_bounds() {
        let [a, b, c, d, e] = ["A", "B", "C", "D", "E"].map(|name| item(name, &[]));
        assert!(matches!(
            compare(&[]),
            Err(CatalogError::InvalidSelection { selected: 0 })
        ));
        assert!(matches!(
            compare(&[&a]),
            Err(CatalogError::InvalidSelection { selected: 1 })
        ));
        assert!(compare(&[&a, &b, &c, &d]).is_ok());
        assert!(matches!(
            compare(&[&a, &b, &c, &d, &e]),
            Err(CatalogError::InvalidSelection { selected: 5 })
        ));
    }

    #[test]
    fn test_same_item_twice_is_one_selection() {
        let a = item("Phone", &[]);
        let b = item("Sofa", &[]);
        assert!(matches!(
            compare(&[&a, &a]),
            Err(CatalogError::InvalidSelection { selected: 1 })
        ));

        let result = compare(&[&a, &b, &a, &a, &b]).unwrap();
        assert_eq!(result.columns, vec!["Phone", "Sofa"]);
    }

    #[test]
    fn test_duplicate_names_get_positional_suffix() {
        let a = item("Phone", &[]);
        let b = item("Phone", &[]);
        let c = item("Other", &[]);
        let result = compare(&[&a, &c, &b]).unwrap();
        assert_eq!(result.columns, vec!["Phone", "Other", "Phone (3)"]);
    }

    #[test]
    fn test_empty_values_and_unnamed_attributes() {
        let mut first = item("One", &[("Cor", ""), ("Cor", "Azul")]);
        first.attributes.push(Attribute {
            name: None,
            value: Some("solto".to_string()),
        });
        let second = item("Two", &[("Cor", "Preto")]);

        let result = compare(&[&first, &second]).unwrap();
        // First occurrence wins within an item, and empty renders as missing
        assert_eq!(row(&result, "Cor"), vec!["-", "Preto"]);
        assert_eq!(row(&result, ""), vec!["solto", "-"]);
    }

    #[test]
    fn test_select_by_names() {
        let catalog = Catalog::new(vec![
            item("Phone", &[("v", "1")]),
            item("Sofa", &[]),
            item("Phone", &[("v", "2")]),
        ]);

        let selected = select_by_names(&catalog, &["", "Phone", "Missing", "Sofa", "Phone"]);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].attribute("v"), Some("1"));
        assert_eq!(selected[1].name, "Sofa");

        let lonely = select_by_names(&catalog, &["Phone", "Phone"]);
        assert!(compare(&lonely).is_err());
    }
}
