//! Filter categories and their fixed option catalogs.
//!
//! Each category is an independent dimension with a fixed list of selectable
//! options; option counts are fixture data, not live aggregates.

use serde::{Deserialize, Serialize};

/// The closed set of filter dimensions on the filter page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterCategory {
    Geography,
    PropertyType,
    Lob,
    EnergySource,
    EfficiencyRange,
    Certifications,
}

impl FilterCategory {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Geography,
        Self::PropertyType,
        Self::Lob,
        Self::EnergySource,
        Self::EfficiencyRange,
        Self::Certifications,
    ];

    /// Display label for the category card header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Geography => "Geography",
            Self::PropertyType => "Property Type",
            Self::Lob => "LOB/Sub-LOB",
            Self::EnergySource => "Energy Source",
            Self::EfficiencyRange => "Efficiency Range",
            Self::Certifications => "Certifications",
        }
    }

    /// Stable key used in config files and `summary -f` CLI specs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Geography => "geography",
            Self::PropertyType => "property-type",
            Self::Lob => "lob",
            Self::EnergySource => "energy-source",
            Self::EfficiencyRange => "efficiency-range",
            Self::Certifications => "certifications",
        }
    }

    /// Parse a category key (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|c| c.key() == lower)
    }
}

/// One selectable option within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Stable machine value (e.g. "toronto").
    pub value: String,
    /// Display label (e.g. "Toronto").
    pub label: String,
    /// Fixture asset count shown next to the label.
    pub count: u32,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, count: u32) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            count,
        }
    }
}

/// The full option catalog: a fixed option list per category.
#[derive(Debug, Clone, Default)]
pub struct FilterCatalog {
    entries: Vec<(FilterCategory, Vec<FilterOption>)>,
}

impl FilterCatalog {
    #[must_use]
    pub fn new(entries: Vec<(FilterCategory, Vec<FilterOption>)>) -> Self {
        Self { entries }
    }

    /// Option list for a category. Empty slice for a category with no
    /// catalog entry rather than a panic.
    #[must_use]
    pub fn options(&self, category: FilterCategory) -> &[FilterOption] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(&[], |(_, opts)| opts.as_slice())
    }

    /// Look up an option by its machine value.
    #[must_use]
    pub fn find(&self, category: FilterCategory, value: &str) -> Option<&FilterOption> {
        self.options(category).iter().find(|o| o.value == value)
    }

    /// Display label for a value, falling back to the raw value when the
    /// catalog has no entry for it.
    #[must_use]
    pub fn label_for<'a>(&'a self, category: FilterCategory, value: &'a str) -> &'a str {
        self.find(category, value).map_or(value, |o| o.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FilterCatalog {
        FilterCatalog::new(vec![(
            FilterCategory::Geography,
            vec![
                FilterOption::new("toronto", "Toronto", 34),
                FilterOption::new("montreal", "Montreal", 23),
            ],
        )])
    }

    #[test]
    fn test_category_keys_roundtrip() {
        for cat in FilterCategory::ALL {
            assert_eq!(FilterCategory::parse(cat.key()), Some(cat));
        }
        assert_eq!(FilterCategory::parse("Property-Type"), Some(FilterCategory::PropertyType));
        assert_eq!(FilterCategory::parse("climate"), None);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.options(FilterCategory::Geography).len(), 2);
        assert!(catalog.options(FilterCategory::Lob).is_empty());

        let toronto = catalog.find(FilterCategory::Geography, "toronto");
        assert_eq!(toronto.map(|o| o.count), Some(34));
        assert!(catalog.find(FilterCategory::Geography, "halifax").is_none());
    }

    #[test]
    fn test_label_fallback() {
        let catalog = catalog();
        assert_eq!(catalog.label_for(FilterCategory::Geography, "toronto"), "Toronto");
        assert_eq!(catalog.label_for(FilterCategory::Geography, "halifax"), "halifax");
    }
}
