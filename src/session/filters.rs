//! Filter aggregator for the portfolio filter page.

use crate::model::{FilterCatalog, FilterCategory, FilterOption};
use indexmap::{IndexMap, IndexSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Selected filter values per category.
///
/// Each category holds an independent ordered set of option values; toggling
/// flips membership, so toggling the same value twice restores the prior
/// state. Iteration order is insertion order (`indexmap`), keeping chips and
/// summaries deterministic.
#[derive(Debug, Clone, Default)]
pub struct PortfolioFilters {
    selected: IndexMap<FilterCategory, IndexSet<String>>,
}

impl PortfolioFilters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `value` in `category`.
    pub fn toggle(&mut self, category: FilterCategory, value: impl Into<String>) {
        let value = value.into();
        let set = self.selected.entry(category).or_default();
        if !set.shift_remove(&value) {
            set.insert(value);
        }
    }

    /// Remove unconditionally (chip dismissal). Absent value is a no-op.
    pub fn clear(&mut self, category: FilterCategory, value: &str) {
        if let Some(set) = self.selected.get_mut(&category) {
            set.shift_remove(value);
        }
    }

    /// Selected values for one category, in selection order.
    #[must_use]
    pub fn selected(&self, category: FilterCategory) -> Vec<&str> {
        self.selected
            .get(&category)
            .map(|s| s.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_selected(&self, category: FilterCategory, value: &str) -> bool {
        self.selected
            .get(&category)
            .is_some_and(|s| s.contains(value))
    }

    /// Count of selected values in one category.
    #[must_use]
    pub fn count(&self, category: FilterCategory) -> usize {
        self.selected.get(&category).map_or(0, IndexSet::len)
    }

    /// Total active filters across all categories.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.selected.values().map(IndexSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// All selected (category, value) pairs in selection order, for the
    /// active-filter chip row.
    #[must_use]
    pub fn all_selected(&self) -> Vec<(FilterCategory, &str)> {
        self.selected
            .iter()
            .flat_map(|(cat, values)| values.iter().map(move |v| (*cat, v.as_str())))
            .collect()
    }

    /// Derived summary statistics for the current filter count.
    #[must_use]
    pub fn summary(&self, model: &SummaryModel) -> FilterSummary {
        model.summarize(self.active_count())
    }
}

/// Case-insensitive substring search over a category's option labels.
///
/// Independent of selection state; an empty term returns the full catalog.
#[must_use]
pub fn search_options<'a>(
    catalog: &'a FilterCatalog,
    category: FilterCategory,
    term: &str,
) -> Vec<&'a FilterOption> {
    let needle = term.to_lowercase();
    catalog
        .options(category)
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .collect()
}

/// Coefficients of the linear summary placeholder.
///
/// This is not a risk model: each statistic moves linearly with the number
/// of active filters and clamps at a floor or ceiling. The defaults are the
/// prototype's constants; the shape (monotonic direction plus clamping) is
/// the contract, the literals are configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SummaryModel {
    /// Matching-asset count with no filters active.
    pub base_assets: u32,
    /// Assets removed per active filter.
    pub assets_step: u32,
    /// Total portfolio value in $B with no filters active.
    pub base_value_billions: f64,
    /// Value removed per active filter, $B.
    pub value_step_billions: f64,
    /// Low-risk percentage with no filters active.
    pub base_low_risk_pct: u8,
    /// Low-risk floor.
    pub min_low_risk_pct: u8,
    /// High-risk percentage with no filters active.
    pub base_high_risk_pct: u8,
    /// High-risk ceiling.
    pub max_high_risk_pct: u8,
    /// Percentage points moved per active filter (both risk directions).
    pub risk_step_pct: u8,
}

impl Default for SummaryModel {
    fn default() -> Self {
        Self {
            base_assets: 276,
            assets_step: 15,
            base_value_billions: 8.0,
            value_step_billions: 0.3,
            base_low_risk_pct: 45,
            min_low_risk_pct: 5,
            base_high_risk_pct: 20,
            max_high_risk_pct: 35,
            risk_step_pct: 2,
        }
    }
}

impl SummaryModel {
    /// Derive the summary for `n` active filters.
    #[must_use]
    pub fn summarize(&self, n: usize) -> FilterSummary {
        let n32 = u32::try_from(n).unwrap_or(u32::MAX);
        let assets_match = self
            .base_assets
            .saturating_sub(self.assets_step.saturating_mul(n32))
            .max(1);
        let total_value_billions =
            (self.base_value_billions - self.value_step_billions * n as f64).max(0.0);
        let low_risk_pct = self
            .base_low_risk_pct
            .saturating_sub(self.risk_step_pct.saturating_mul(n32.min(255) as u8))
            .max(self.min_low_risk_pct);
        let high_risk_pct = self
            .base_high_risk_pct
            .saturating_add(self.risk_step_pct.saturating_mul(n32.min(255) as u8))
            .min(self.max_high_risk_pct);
        FilterSummary {
            assets_match,
            total_value_billions,
            low_risk_pct,
            high_risk_pct,
        }
    }
}

/// Derived summary statistics shown on the filter page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSummary {
    pub assets_match: u32,
    pub total_value_billions: f64,
    pub low_risk_pct: u8,
    pub high_risk_pct: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut filters = PortfolioFilters::new();
        filters.toggle(FilterCategory::Geography, "toronto");
        assert!(filters.is_selected(FilterCategory::Geography, "toronto"));

        filters.toggle(FilterCategory::Geography, "toronto");
        assert!(!filters.is_selected(FilterCategory::Geography, "toronto"));
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_categories_independent() {
        let mut filters = PortfolioFilters::new();
        filters.toggle(FilterCategory::Geography, "toronto");
        filters.toggle(FilterCategory::PropertyType, "office");

        assert_eq!(filters.count(FilterCategory::Geography), 1);
        assert_eq!(filters.count(FilterCategory::PropertyType), 1);

        filters.clear(FilterCategory::Geography, "toronto");
        assert_eq!(filters.count(FilterCategory::Geography), 0);
        assert_eq!(filters.count(FilterCategory::PropertyType), 1);
    }

    #[test]
    fn test_clear_absent_value_is_noop() {
        let mut filters = PortfolioFilters::new();
        filters.clear(FilterCategory::Lob, "real-estate");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_all_selected_preserves_order() {
        let mut filters = PortfolioFilters::new();
        filters.toggle(FilterCategory::Geography, "toronto");
        filters.toggle(FilterCategory::PropertyType, "office");
        filters.toggle(FilterCategory::Geography, "montreal");

        let chips = filters.all_selected();
        assert_eq!(
            chips,
            vec![
                (FilterCategory::Geography, "toronto"),
                (FilterCategory::Geography, "montreal"),
                (FilterCategory::PropertyType, "office"),
            ]
        );
    }

    #[test]
    fn test_summary_defaults_match_prototype() {
        let model = SummaryModel::default();

        let s0 = model.summarize(0);
        assert_eq!(s0.assets_match, 276);
        assert!((s0.total_value_billions - 8.0).abs() < f64::EPSILON);
        assert_eq!(s0.low_risk_pct, 45);
        assert_eq!(s0.high_risk_pct, 20);

        let s2 = model.summarize(2);
        assert_eq!(s2.assets_match, 246);
        assert!((s2.total_value_billions - 7.4).abs() < 1e-9);
        assert_eq!(s2.low_risk_pct, 41);
        assert_eq!(s2.high_risk_pct, 24);
    }

    #[test]
    fn test_summary_clamps() {
        let model = SummaryModel::default();
        let s = model.summarize(40);
        assert_eq!(s.assets_match, 1);
        assert!(s.total_value_billions.abs() < f64::EPSILON, "value clamps at zero");
        assert_eq!(s.low_risk_pct, 5);
        assert_eq!(s.high_risk_pct, 35);
    }

    #[test]
    fn test_option_search_case_insensitive() {
        let catalog = fixtures::filter_catalog();
        let hits = search_options(&catalog, FilterCategory::Geography, "TOR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "Toronto");

        // Empty term returns the whole catalog for the category
        let all = search_options(&catalog, FilterCategory::Geography, "");
        assert_eq!(all.len(), catalog.options(FilterCategory::Geography).len());
    }

    #[test]
    fn test_option_search_ignores_selection_state() {
        let catalog = fixtures::filter_catalog();
        let mut filters = PortfolioFilters::new();
        filters.toggle(FilterCategory::Geography, "toronto");

        let hits = search_options(&catalog, FilterCategory::Geography, "toronto");
        assert_eq!(hits.len(), 1, "selected options still appear in search");
    }
}
