//! Chart interaction relay: clicking an NOI projection point opens a
//! revenue-vs-opex breakdown for that year.

use crate::model::RevenueOpex;

/// Records the detail key (the clicked year) and whether the breakdown
/// popover is open.
///
/// Lookup is performed against a static series on read; a year with no
/// breakdown entry renders as an empty popover rather than failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakdownRelay {
    detail_year: Option<u16>,
}

impl BreakdownRelay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the clicked year and open the breakdown.
    pub fn select_year(&mut self, year: u16) {
        self.detail_year = Some(year);
    }

    /// Close the breakdown. Idempotent.
    pub fn close(&mut self) {
        self.detail_year = None;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.detail_year.is_some()
    }

    /// The current detail key, if the breakdown is open.
    #[must_use]
    pub const fn detail_year(&self) -> Option<u16> {
        self.detail_year
    }

    /// Breakdown entry for the current detail key. `None` both when the
    /// popover is closed and when the series has no entry for the year.
    #[must_use]
    pub fn breakdown<'a>(&self, series: &'a [RevenueOpex]) -> Option<&'a RevenueOpex> {
        let year = self.detail_year?;
        series.iter().find(|p| p.year == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[test]
    fn test_select_then_lookup() {
        let series = fixtures::asset_revenue_opex();
        let mut relay = BreakdownRelay::new();

        relay.select_year(2030);
        assert!(relay.is_open());

        let entry = relay.breakdown(&series).expect("2030 is in the series");
        assert!((entry.revenue - 9.2).abs() < f64::EPSILON);
        assert!((entry.opex - 3.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_year_renders_empty() {
        let series = fixtures::asset_revenue_opex();
        let mut relay = BreakdownRelay::new();

        relay.select_year(2027);
        assert!(relay.is_open(), "popover opens even without data");
        assert!(relay.breakdown(&series).is_none());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut relay = BreakdownRelay::new();
        relay.select_year(2035);

        relay.close();
        assert!(!relay.is_open());
        assert_eq!(relay.detail_year(), None);

        relay.close();
        assert!(!relay.is_open());
    }
}
