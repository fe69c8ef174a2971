use crate::models::Item;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Field a list of items can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Brand,
    Segment,
    Price,
}

impl SortField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "brand" => Some(Self::Brand),
            "segment" => Some(Self::Segment),
            "price" => Some(Self::Price),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Brand => "brand",
            Self::Segment => "segment",
            Self::Price => "price",
        }
    }
}

/// Sort items by the given field. The sort is stable; ties fall back to the
/// normalized name.
pub fn sort_items(items: &mut [Item], field: SortField) {
    items.sort_by(|a, b| {
        let primary = match field {
            SortField::Name => Ordering::Equal,
            SortField::Brand => normalize_for_sorting(&a.brand).cmp(&normalize_for_sorting(&b.brand)),
            SortField::Segment => {
                normalize_for_sorting(&a.segment).cmp(&normalize_for_sorting(&b.segment))
            }
            SortField::Price => compare_prices(&a.price, &b.price),
        };

        primary.then_with(|| normalize_for_sorting(&a.name).cmp(&normalize_for_sorting(&b.name)))
    });
}

/// Numeric prices ascending, unparseable prices last.
fn compare_prices(a: &str, b: &str) -> Ordering {
    match (parse_price(a), parse_price(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Best-effort numeric reading of a display price.
/// Accepts `.` or `,` as the decimal separator.
pub fn parse_price(price: &str) -> Option<f64> {
    let trimmed = price.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Normalize string for sorting
/// - Decompose (NFD) and drop combining marks, so "Móveis" sorts as "moveis"
/// - Lowercase
/// - Collapse internal whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let folded: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
