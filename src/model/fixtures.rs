//! Static fixture tables.
//!
//! This module is the crate's only external data boundary: a read-only data
//! source the session and TUI layers consume. Everything here is a fixed
//! table baked into the binary; there is no loading, refreshing, or
//! computation behind it.

use super::{
    Asset, AssetRecord, FieldId, FilterCatalog, FilterCategory, FilterOption, GeographyExposure,
    KpiRow, NoiPoint, PortfolioRow, RevenueOpex, RiskRating, RiskSlice, Trend,
};
use indexmap::IndexMap;

/// Address book searched on the asset search page.
pub const ADDRESS_BOOK: [&str; 10] = [
    "100 King Street West, Toronto, ON",
    "1 Place Ville Marie, Montreal, QC",
    "1055 West Georgia Street, Vancouver, BC",
    "400 3rd Avenue SW, Calgary, AB",
    "150 Elgin Street, Ottawa, ON",
    "200 Bay Street, Toronto, ON",
    "1250 René-Lévesque Blvd West, Montreal, QC",
    "1021 West Hastings Street, Vancouver, BC",
    "525 8th Avenue SW, Calgary, AB",
    "Constitution Square, Ottawa, ON",
];

/// Assets selectable from the address book. Only the first three addresses
/// resolve to full asset records; the rest are suggestions only, matching
/// the prototype data.
#[must_use]
pub fn sample_assets() -> Vec<Asset> {
    vec![
        Asset::new(
            1,
            "100 King Street West, Toronto, ON",
            "Office Tower",
            "$45M",
            RiskRating::Medium,
        ),
        Asset::new(
            2,
            "1 Place Ville Marie, Montreal, QC",
            "Mixed Use",
            "$78M",
            RiskRating::Low,
        ),
        Asset::new(
            3,
            "1055 West Georgia Street, Vancouver, BC",
            "Office Tower",
            "$92M",
            RiskRating::High,
        ),
    ]
}

/// The editable detail record shown on the asset overview page.
#[must_use]
pub fn asset_record() -> AssetRecord {
    let mut values = IndexMap::new();
    values.insert(FieldId::Company, "RBC Real Estate Holdings".to_string());
    values.insert(FieldId::Lob, "Commercial Banking".to_string());
    values.insert(FieldId::PropertyType, "Office Tower".to_string());
    values.insert(FieldId::Size, "450,000 sq ft".to_string());
    values.insert(FieldId::Value, "$45,000,000".to_string());
    values.insert(FieldId::Age, "15 years".to_string());
    values.insert(FieldId::HeatSource, "Natural Gas".to_string());
    values.insert(FieldId::Certifications, "LEED Gold, ENERGY STAR".to_string());
    values.insert(FieldId::LoanAmount, "$32,000,000".to_string());
    values.insert(FieldId::LoanTerm, "84 months".to_string());
    values.insert(FieldId::AnnualDebtPayments, "$4,800,000".to_string());
    values.insert(FieldId::Revenue2024, "$8,500,000".to_string());
    values.insert(FieldId::Opex2024, "$3,200,000".to_string());
    AssetRecord::new("100 King Street West, Toronto, ON M5X 1A9", values)
}

/// Filter option catalog for the filter page.
#[must_use]
pub fn filter_catalog() -> FilterCatalog {
    FilterCatalog::new(vec![
        (
            FilterCategory::Geography,
            vec![
                FilterOption::new("north-america", "North America", 156),
                FilterOption::new("canada", "Canada", 89),
                FilterOption::new("toronto", "Toronto", 34),
                FilterOption::new("montreal", "Montreal", 23),
                FilterOption::new("vancouver", "Vancouver", 18),
                FilterOption::new("calgary", "Calgary", 14),
            ],
        ),
        (
            FilterCategory::PropertyType,
            vec![
                FilterOption::new("office", "Office", 78),
                FilterOption::new("retail", "Retail", 45),
                FilterOption::new("mixed-use", "Mixed Use", 34),
                FilterOption::new("industrial", "Industrial", 28),
                FilterOption::new("hospitality", "Hospitality", 19),
            ],
        ),
        (
            FilterCategory::Lob,
            vec![
                FilterOption::new("commercial-banking", "Commercial Banking", 89),
                FilterOption::new("corporate-banking", "Corporate Banking", 67),
                FilterOption::new("real-estate", "Real Estate", 45),
                FilterOption::new("capital-markets", "Capital Markets", 23),
            ],
        ),
        (
            FilterCategory::EnergySource,
            vec![
                FilterOption::new("natural-gas", "Natural Gas", 98),
                FilterOption::new("electricity", "Electricity", 76),
                FilterOption::new("oil", "Oil", 34),
                FilterOption::new("renewable", "Renewable", 28),
                FilterOption::new("mixed", "Mixed", 18),
            ],
        ),
        (
            FilterCategory::EfficiencyRange,
            vec![
                FilterOption::new("high", "High Efficiency", 45),
                FilterOption::new("medium", "Medium Efficiency", 89),
                FilterOption::new("low", "Low Efficiency", 67),
            ],
        ),
        (
            FilterCategory::Certifications,
            vec![
                FilterOption::new("leed-gold", "LEED Gold", 34),
                FilterOption::new("leed-silver", "LEED Silver", 28),
                FilterOption::new("energy-star", "ENERGY STAR", 45),
                FilterOption::new("boma-best", "BOMA BEST", 23),
                FilterOption::new("none", "No Certification", 89),
            ],
        ),
    ])
}

/// Asset-level NOI projection series (asset view page).
#[must_use]
pub fn asset_noi_projection() -> Vec<NoiPoint> {
    vec![
        NoiPoint::new(2025, 5.2, 4.8, 4.9),
        NoiPoint::new(2030, 5.5, 4.2, 5.8),
        NoiPoint::new(2035, 5.8, 3.8, 6.2),
        NoiPoint::new(2040, 6.0, 3.2, 6.8),
        NoiPoint::new(2045, 6.2, 2.8, 7.2),
        NoiPoint::new(2050, 6.5, 2.5, 7.8),
    ]
}

/// Asset-level revenue vs opex series keyed by year (breakdown popover).
#[must_use]
pub fn asset_revenue_opex() -> Vec<RevenueOpex> {
    vec![
        RevenueOpex::new(2025, 8.8, 3.6),
        RevenueOpex::new(2030, 9.2, 3.4),
        RevenueOpex::new(2035, 9.8, 3.6),
        RevenueOpex::new(2040, 10.2, 3.4),
        RevenueOpex::new(2045, 10.8, 3.6),
        RevenueOpex::new(2050, 11.5, 3.7),
    ]
}

/// Portfolio-wide NOI projection series (portfolio view page).
#[must_use]
pub fn portfolio_noi_projection() -> Vec<NoiPoint> {
    vec![
        NoiPoint::new(2025, 45.2, 42.1, 44.8),
        NoiPoint::new(2030, 48.5, 38.2, 52.8),
        NoiPoint::new(2035, 51.8, 34.8, 58.2),
        NoiPoint::new(2040, 55.0, 31.2, 64.8),
        NoiPoint::new(2045, 58.2, 27.8, 71.2),
        NoiPoint::new(2050, 61.5, 24.5, 78.8),
    ]
}

/// Portfolio-wide revenue vs opex series.
#[must_use]
pub fn portfolio_revenue_opex() -> Vec<RevenueOpex> {
    vec![
        RevenueOpex::new(2025, 88.8, 43.6),
        RevenueOpex::new(2030, 95.2, 42.4),
        RevenueOpex::new(2035, 102.8, 44.6),
        RevenueOpex::new(2040, 110.2, 45.4),
        RevenueOpex::new(2045, 118.8, 47.6),
        RevenueOpex::new(2050, 128.5, 50.7),
    ]
}

/// Portfolio asset performance table.
#[must_use]
pub fn portfolio_table() -> Vec<PortfolioRow> {
    vec![
        PortfolioRow::new("M5X 1A9", RiskRating::Medium, 0.15, Trend::Down, -12, 4680),
        PortfolioRow::new("H3B 4W8", RiskRating::Low, 0.08, Trend::Flat, -8, 3200),
        PortfolioRow::new("V6C 2T8", RiskRating::High, -0.05, Trend::Up, 5, 8900),
        PortfolioRow::new("T2P 2M5", RiskRating::Medium, 0.12, Trend::Down, -15, 5400),
        PortfolioRow::new("K1P 1J1", RiskRating::Low, 0.18, Trend::Down, -20, 2800),
    ]
}

/// KPI comparison rows on the asset view page.
#[must_use]
pub fn kpi_rows() -> Vec<KpiRow> {
    vec![
        KpiRow::new("100 King St W", RiskRating::Medium, 0.15, Trend::Down, -12, 4680),
        KpiRow::new("Benchmark", RiskRating::Medium, 0.0, Trend::Flat, 0, 5200),
    ]
}

/// Portfolio risk distribution (portfolio view pie).
#[must_use]
pub fn portfolio_risk_slices() -> Vec<RiskSlice> {
    vec![
        RiskSlice {
            rating: RiskRating::Low,
            percent: 42,
        },
        RiskSlice {
            rating: RiskRating::Medium,
            percent: 38,
        },
        RiskSlice {
            rating: RiskRating::High,
            percent: 20,
        },
    ]
}

/// Home page risk distribution.
#[must_use]
pub fn home_risk_slices() -> Vec<RiskSlice> {
    vec![
        RiskSlice {
            rating: RiskRating::Low,
            percent: 45,
        },
        RiskSlice {
            rating: RiskRating::Medium,
            percent: 35,
        },
        RiskSlice {
            rating: RiskRating::High,
            percent: 20,
        },
    ]
}

/// Regional exposure shown on the home page (country level).
#[must_use]
pub fn home_geography() -> Vec<GeographyExposure> {
    vec![
        GeographyExposure::new("Canada", 125, 2.8),
        GeographyExposure::new("United States", 89, 3.2),
        GeographyExposure::new("United Kingdom", 34, 1.1),
        GeographyExposure::new("European Union", 28, 0.9),
    ]
}

/// Regional exposure shown on the portfolio view (city level).
#[must_use]
pub fn portfolio_geography() -> Vec<GeographyExposure> {
    vec![
        GeographyExposure::new("Toronto", 45, 1.8),
        GeographyExposure::new("Montreal", 32, 1.2),
        GeographyExposure::new("Vancouver", 28, 1.5),
        GeographyExposure::new("Calgary", 24, 0.9),
        GeographyExposure::new("Ottawa", 18, 0.7),
    ]
}
