use crate::models::ALL;
use std::collections::{BTreeMap, BTreeSet};

/// Segment assigned to brands that have no registered mapping.
pub const FALLBACK_SEGMENT: &str = "Outros";

/// Built-in brand to segment table, in declaration order.
/// Repeated brands are folded with the last entry winning.
const BUILTIN_BRAND_SEGMENTS: &[(&str, &str)] = &[
    ("Apple", "Tecnologia"),
    ("Samsung", "Tecnologia"),
    ("Apple", "Smartphones"),
    ("Samsung", "Smartphones"),
    ("Bartira", "Móveis"),
];

/// Immutable mapping from brand name to catalog segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandSegmentRegistry {
    segments: BTreeMap<String, String>,
}

impl Default for BrandSegmentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BrandSegmentRegistry {
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_BRAND_SEGMENTS.iter().copied())
    }

    /// Build a registry from (brand, segment) pairs. Later pairs overwrite
    /// earlier ones for the same brand.
    pub fn from_pairs<I, B, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (B, S)>,
        B: Into<String>,
        S: Into<String>,
    {
        let mut registry = Self {
            segments: BTreeMap::new(),
        };
        registry.insert_all(pairs);
        registry
    }

    /// A copy of this registry with extra pairs applied on top.
    pub fn extended<I, B, S>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (B, S)>,
        B: Into<String>,
        S: Into<String>,
    {
        let mut registry = self.clone();
        registry.insert_all(pairs);
        registry
    }

    fn insert_all<I, B, S>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (B, S)>,
        B: Into<String>,
        S: Into<String>,
    {
        for (brand, segment) in pairs {
            self.segments.insert(brand.into(), segment.into());
        }
    }

    /// Segment for an exact (case-sensitive) brand match, else [`FALLBACK_SEGMENT`].
    pub fn segment_of(&self, brand: &str) -> &str {
        self.segments
            .get(brand)
            .map(String::as_str)
            .unwrap_or(FALLBACK_SEGMENT)
    }

    pub fn is_registered(&self, brand: &str) -> bool {
        self.segments.contains_key(brand)
    }

    /// Registered brands in ascending order, preceded by [`ALL`].
    pub fn all_brands(&self) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(self.segments.keys().cloned())
            .collect()
    }

    /// Distinct registered segments in ascending order, preceded by [`ALL`].
    pub fn all_segments(&self) -> Vec<String> {
        let distinct: BTreeSet<&String> = self.segments.values().collect();
        std::iter::once(ALL.to_string())
            .chain(distinct.into_iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_last_write_wins() {
        let registry = BrandSegmentRegistry::builtin();
        assert_eq!(registry.segment_of("Apple"), "Smartphones");
        assert_eq!(registry.segment_of("Samsung"), "Smartphones");
        assert_eq!(registry.segment_of("Bartira"), "Móveis");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unknown_brand_falls_back() {
        let registry = BrandSegmentRegistry::builtin();
        assert_eq!(registry.segment_of("Motorola"), FALLBACK_SEGMENT);
        assert_eq!(registry.segment_of(""), FALLBACK_SEGMENT);
        // Lookups are case-sensitive
        assert_eq!(registry.segment_of("apple"), FALLBACK_SEGMENT);
        assert!(!registry.is_registered("apple"));
    }

    #[test]
    fn test_option_lists_start_with_all() {
        let registry = BrandSegmentRegistry::builtin();
        assert_eq!(registry.all_brands(), vec!["All", "Apple", "Bartira", "Samsung"]);
        assert_eq!(registry.all_segments(), vec!["All", "Móveis", "Smartphones"]);
    }

    #[test]
    fn test_extended_overrides_and_adds() {
        let registry =
            BrandSegmentRegistry::builtin().extended([("Apple", "Tecnologia"), ("Tok&Stok", "Móveis")]);
        assert_eq!(registry.segment_of("Apple"), "Tecnologia");
        assert_eq!(registry.segment_of("Tok&Stok"), "Móveis");
        assert_eq!(registry.segment_of("Samsung"), "Smartphones");
        assert_eq!(
            registry.all_segments(),
            vec!["All", "Móveis", "Smartphones", "Tecnologia"]
        );
    }

    #[test]
    fn test_empty_registry_is_still_total() {
        let registry = BrandSegmentRegistry::from_pairs(Vec::<(String, String)>::new());
        assert!(registry.is_empty());
        assert_eq!(registry.segment_of("Apple"), FALLBACK_SEGMENT);
        assert_eq!(registry.all_brands(), vec!["All"]);
    }
}
