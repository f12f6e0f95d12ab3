//! Asset records and risk classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for an asset, unique within the fixture set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub u32);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Climate risk classification. Closed set; every asset carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    Low,
    Medium,
    High,
}

impl RiskRating {
    /// Full display label ("Low", "Medium", "High").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// One-letter code used in compact tables ("L", "M", "H").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::High => "H",
        }
    }

    /// Parse either the one-letter code or the full label, case-insensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Some(Self::Low),
            "m" | "medium" => Some(Self::Medium),
            "h" | "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single commercial real estate asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    /// Street address, also the search key on the asset search page.
    pub address: String,
    /// Property type display string (e.g. "Office Tower").
    pub property_type: String,
    /// Appraised value display string (e.g. "$45M").
    pub value: String,
    pub risk: RiskRating,
}

impl Asset {
    pub fn new(
        id: u32,
        address: impl Into<String>,
        property_type: impl Into<String>,
        value: impl Into<String>,
        risk: RiskRating,
    ) -> Self {
        Self {
            id: AssetId(id),
            address: address.into(),
            property_type: property_type.into(),
            value: value.into(),
            risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_rating_codes() {
        assert_eq!(RiskRating::Low.code(), "L");
        assert_eq!(RiskRating::Medium.code(), "M");
        assert_eq!(RiskRating::High.code(), "H");
        assert_eq!(RiskRating::High.label(), "High");
    }

    #[test]
    fn test_risk_rating_parse() {
        assert_eq!(RiskRating::parse("L"), Some(RiskRating::Low));
        assert_eq!(RiskRating::parse("medium"), Some(RiskRating::Medium));
        assert_eq!(RiskRating::parse("HIGH"), Some(RiskRating::High));
        assert_eq!(RiskRating::parse("severe"), None);
    }

    #[test]
    fn test_asset_construction() {
        let asset = Asset::new(
            1,
            "100 King Street West, Toronto, ON",
            "Office Tower",
            "$45M",
            RiskRating::Medium,
        );
        assert_eq!(asset.id, AssetId(1));
        assert_eq!(asset.risk.label(), "Medium");
    }
}
