use crate::models::Item;
use std::collections::HashMap;

/// Group key for items whose field is empty.
pub const UNSPECIFIED_GROUP: &str = "_unspecified_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Segment,
    Brand,
}

impl GroupField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "segment" => Some(Self::Segment),
            "brand" => Some(Self::Brand),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Brand => "brand",
        }
    }

    fn key<'a>(&self, item: &'a Item) -> &'a str {
        match self {
            Self::Segment => &item.segment,
            Self::Brand => &item.brand,
        }
    }
}

/// Group items by segment or brand
/// Items keep their relative order inside each group
pub fn group_items(items: &[Item], field: GroupField) -> HashMap<String, Vec<Item>> {
    let mut groups: HashMap<String, Vec<Item>> = HashMap::new();

    for item in items {
        let key = field.key(item);
        let key = if key.is_empty() { UNSPECIFIED_GROUP } else { key };
        groups.entry(key.to_string()).or_default().push(item.clone());
    }

    groups
}

/// Get sorted group names from a grouped items map
pub fn get_sorted_group_names(groups: &HashMap<String, Vec<Item>>) -> Vec<String> {
    let mut group_names: Vec<String> = groups.keys().cloned().collect();
    group_names.sort();
    group_names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, brand: &str, segment: &str) -> Item {
        Item {
            name: name.to_string(),
            description: String::new(),
            brand: brand.to_string(),
            segment: segment.to_string(),
            price: String::new(),
            image_url: String::new(),
            attributes: Vec::new(),
        }
    }

    #[test]
    fn test_group_by_segment() {
        let items = vec![
            item("iPhone", "Apple", "Smartphones"),
            item("Sofá", "Bartira", "Móveis"),
            item("Galaxy", "Samsung", "Smartphones"),
        ];

        let groups = group_items(&items, GroupField::Segment);
        assert_eq!(get_sorted_group_names(&groups), vec!["Móveis", "Smartphones"]);
        let phones: Vec<_> = groups["Smartphones"].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(phones, vec!["iPhone", "Galaxy"]);
    }

    #[test]
    fn test_empty_brand_goes_to_unspecified() {
        let items = vec![item("Caneca", "", "Outros"), item("iPhone", "Apple", "Smartphones")];
        let groups = group_items(&items, GroupField::Brand);
        assert_eq!(groups[UNSPECIFIED_GROUP].len(), 1);
        assert_eq!(get_sorted_group_names(&groups), vec!["Apple", UNSPECIFIED_GROUP]);
    }
}
