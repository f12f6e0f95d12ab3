//! The editable asset detail form: field identifiers, sections, and the
//! committed record the editor mutates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The closed set of editable fields on the asset overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Company,
    Lob,
    PropertyType,
    Size,
    Value,
    Age,
    HeatSource,
    Certifications,
    LoanAmount,
    LoanTerm,
    AnnualDebtPayments,
    Revenue2024,
    Opex2024,
}

/// Card grouping on the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Property,
    Loan,
    Noi,
}

impl FormSection {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Property => "Property Information",
            Self::Loan => "Loan Information",
            Self::Noi => "NOI 2024 Breakdown",
        }
    }
}

impl FieldId {
    /// All fields in form display order.
    pub const ALL: [Self; 13] = [
        Self::Company,
        Self::Lob,
        Self::PropertyType,
        Self::Size,
        Self::Value,
        Self::Age,
        Self::HeatSource,
        Self::Certifications,
        Self::LoanAmount,
        Self::LoanTerm,
        Self::AnnualDebtPayments,
        Self::Revenue2024,
        Self::Opex2024,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Lob => "Line of Business",
            Self::PropertyType => "Property Type",
            Self::Size => "Size",
            Self::Value => "Value",
            Self::Age => "Age",
            Self::HeatSource => "Heat Source",
            Self::Certifications => "Certifications",
            Self::LoanAmount => "Loan Amount",
            Self::LoanTerm => "Term (TTM)",
            Self::AnnualDebtPayments => "Annual Debt Payments",
            Self::Revenue2024 => "Revenue",
            Self::Opex2024 => "Operating Expenses",
        }
    }

    #[must_use]
    pub const fn section(self) -> FormSection {
        match self {
            Self::Company
            | Self::Lob
            | Self::PropertyType
            | Self::Size
            | Self::Value
            | Self::Age
            | Self::HeatSource
            | Self::Certifications => FormSection::Property,
            Self::LoanAmount | Self::LoanTerm | Self::AnnualDebtPayments => FormSection::Loan,
            Self::Revenue2024 | Self::Opex2024 => FormSection::Noi,
        }
    }
}

/// Committed attribute values for one asset, in display order.
///
/// The record is created from fixture data and mutated only by the field
/// editor committing a draft; nothing ever removes a field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetRecord {
    /// Street address shown on the location card (not editable).
    pub address: String,
    values: IndexMap<FieldId, String>,
}

impl AssetRecord {
    #[must_use]
    pub fn new(address: impl Into<String>, values: IndexMap<FieldId, String>) -> Self {
        Self {
            address: address.into(),
            values,
        }
    }

    /// Committed value for a field; empty string for a field the record
    /// never carried (safe default, never a panic).
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Overwrite a committed value. Called by the editor on save only.
    pub fn set_value(&mut self, field: FieldId, value: String) {
        self.values.insert(field, value);
    }

    /// Fields of one form section, in display order.
    pub fn section_fields(section: FormSection) -> impl Iterator<Item = FieldId> {
        FieldId::ALL.into_iter().filter(move |f| f.section() == section)
    }

    /// Net operating income: revenue minus opex, parsed from the committed
    /// currency strings. `None` when either field does not parse as a
    /// dollar amount.
    #[must_use]
    pub fn noi(&self) -> Option<i64> {
        let revenue = parse_dollars(self.value(FieldId::Revenue2024))?;
        let opex = parse_dollars(self.value(FieldId::Opex2024))?;
        Some(revenue - opex)
    }
}

/// Parse a display amount like "$8,500,000" to whole dollars.
///
/// Strips `$` and thousands separators, then requires the remainder to be a
/// plain integer (an optional leading minus is accepted).
#[must_use]
pub(crate) fn parse_dollars(s: &str) -> Option<i64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AssetRecord {
        let mut values = IndexMap::new();
        values.insert(FieldId::Company, "RBC Real Estate Holdings".to_string());
        values.insert(FieldId::Revenue2024, "$8,500,000".to_string());
        values.insert(FieldId::Opex2024, "$3,200,000".to_string());
        AssetRecord::new("100 King Street West, Toronto, ON M5X 1A9", values)
    }

    #[test]
    fn test_parse_dollars() {
        assert_eq!(parse_dollars("$8,500,000"), Some(8_500_000));
        assert_eq!(parse_dollars("3200000"), Some(3_200_000));
        assert_eq!(parse_dollars("-$1,000"), Some(-1000));
        assert_eq!(parse_dollars("450,000 sq ft"), None);
        assert_eq!(parse_dollars(""), None);
        assert_eq!(parse_dollars("$"), None);
    }

    #[test]
    fn test_noi_derived_from_strings() {
        let record = record();
        assert_eq!(record.noi(), Some(5_300_000));
    }

    #[test]
    fn test_noi_none_on_unparseable_field() {
        let mut record = record();
        record.set_value(FieldId::Opex2024, "unknown".to_string());
        assert_eq!(record.noi(), None);
    }

    #[test]
    fn test_missing_field_is_empty_not_panic() {
        let record = record();
        assert_eq!(record.value(FieldId::LoanAmount), "");
    }

    #[test]
    fn test_section_fields_order() {
        let loan: Vec<FieldId> = AssetRecord::section_fields(FormSection::Loan).collect();
        assert_eq!(
            loan,
            vec![FieldId::LoanAmount, FieldId::LoanTerm, FieldId::AnnualDebtPayments]
        );
    }
}
