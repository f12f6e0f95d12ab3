//! Chart series and table row types.

use super::asset::RiskRating;
use serde::{Deserialize, Serialize};

/// One point of an NOI projection series ($M per scenario line).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiPoint {
    pub year: u16,
    pub baseline: f64,
    pub pay_fines: f64,
    pub retrofit: f64,
}

impl NoiPoint {
    pub const fn new(year: u16, baseline: f64, pay_fines: f64, retrofit: f64) -> Self {
        Self {
            year,
            baseline,
            pay_fines,
            retrofit,
        }
    }
}

/// Revenue vs operating expenses for one year ($M). Shown in the drill-down
/// breakdown after a chart point is selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueOpex {
    pub year: u16,
    pub revenue: f64,
    pub opex: f64,
}

impl RevenueOpex {
    pub const fn new(year: u16, revenue: f64, opex: f64) -> Self {
        Self {
            year,
            revenue,
            opex,
        }
    }
}

/// Regional exposure bar (property count and total value in $B).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographyExposure {
    pub region: String,
    pub properties: u32,
    pub value_billions: f64,
}

impl GeographyExposure {
    pub fn new(region: impl Into<String>, properties: u32, value_billions: f64) -> Self {
        Self {
            region: region.into(),
            properties,
            value_billions,
        }
    }
}

/// One slice of the portfolio risk distribution (percentages sum to 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSlice {
    pub rating: RiskRating,
    pub percent: u8,
}

/// Directional indicator for delta columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Arrow glyph for table cells.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
        }
    }

    /// Word form for CSV cells (arrows don't survive every consumer).
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }
}

/// One row of the portfolio asset performance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRow {
    pub postal_code: String,
    pub risk: RiskRating,
    /// Change in debt service coverage ratio under the selected scenario.
    pub dscr_delta: f64,
    /// Loan-to-value directionality.
    pub ltv_trend: Trend,
    /// Energy intensity change, percent.
    pub energy_intensity_delta: i8,
    /// Estimated retrofit cost per unit, whole dollars.
    pub retrofit_cost: u32,
}

impl PortfolioRow {
    pub fn new(
        postal_code: impl Into<String>,
        risk: RiskRating,
        dscr_delta: f64,
        ltv_trend: Trend,
        energy_intensity_delta: i8,
        retrofit_cost: u32,
    ) -> Self {
        Self {
            postal_code: postal_code.into(),
            risk,
            dscr_delta,
            ltv_trend,
            energy_intensity_delta,
            retrofit_cost,
        }
    }
}

/// KPI comparison row on the asset view page (asset vs benchmark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiRow {
    pub label: String,
    pub risk: RiskRating,
    pub dscr_delta: f64,
    pub ltv_trend: Trend,
    pub energy_intensity_delta: i8,
    pub retrofit_cost: u32,
}

impl KpiRow {
    pub fn new(
        label: impl Into<String>,
        risk: RiskRating,
        dscr_delta: f64,
        ltv_trend: Trend,
        energy_intensity_delta: i8,
        retrofit_cost: u32,
    ) -> Self {
        Self {
            label: label.into(),
            risk,
            dscr_delta,
            ltv_trend,
            energy_intensity_delta,
            retrofit_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_rendering() {
        assert_eq!(Trend::Up.arrow(), "↑");
        assert_eq!(Trend::Down.word(), "down");
        assert_eq!(Trend::Flat.word(), "flat");
    }

    #[test]
    fn test_noi_point() {
        let p = NoiPoint::new(2030, 5.5, 4.2, 5.8);
        assert_eq!(p.year, 2030);
        assert!(p.retrofit > p.pay_fines);
    }
}
