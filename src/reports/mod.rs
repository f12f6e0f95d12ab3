//! CSV export generation.
//!
//! Pure string builders; file writing lives in `tui::export` and the
//! `export` CLI command. Header text and column order match the dashboard's
//! exports. Numeric cells are written unformatted (no currency symbols, no
//! thousands separators) and trend cells as words, so the output stays
//! valid single-delimiter CSV.

use crate::model::{KpiRow, NoiPoint, PortfolioRow};

/// Header of the portfolio asset performance export.
pub const PORTFOLIO_CSV_HEADER: &str =
    "Postal Code,Risk Rating,DSCR Delta,LTV Delta,Energy Intensity Delta,Retrofit Cost";

/// Header of the NOI projection export.
pub const PROJECTIONS_CSV_HEADER: &str = "Year,Baseline NOI,Pay Fines NOI,Retrofit NOI";

/// Render the portfolio asset performance table as CSV.
#[must_use]
pub fn portfolio_table_csv(rows: &[PortfolioRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(PORTFOLIO_CSV_HEADER.to_string());
    for row in rows {
        lines.push(format!(
            "{},{},{:.2},{},{},{}",
            row.postal_code,
            row.risk.code(),
            row.dscr_delta,
            row.ltv_trend.word(),
            row.energy_intensity_delta,
            row.retrofit_cost,
        ));
    }
    lines.join("\n")
}

/// Render an NOI projection series as CSV.
#[must_use]
pub fn projections_csv(series: &[NoiPoint]) -> String {
    let mut lines = Vec::with_capacity(series.len() + 1);
    lines.push(PROJECTIONS_CSV_HEADER.to_string());
    for point in series {
        lines.push(format!(
            "{},{},{},{}",
            point.year, point.baseline, point.pay_fines, point.retrofit
        ));
    }
    lines.join("\n")
}

/// Render the KPI comparison table as CSV (asset view side panel).
#[must_use]
pub fn kpi_csv(rows: &[KpiRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push("Asset,Risk,DSCR Delta,LTV,Energy Delta,Retrofit Cost".to_string());
    for row in rows {
        lines.push(format!(
            "{},{},{:.2},{},{},{}",
            csv_escape(&row.label),
            row.risk.code(),
            row.dscr_delta,
            row.ltv_trend.word(),
            row.energy_intensity_delta,
            row.retrofit_cost,
        ));
    }
    lines.join("\n")
}

/// Quote a field if it contains a delimiter or quote.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[test]
    fn test_portfolio_csv_header_and_shape() {
        let csv = portfolio_table_csv(&fixtures::portfolio_table());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], PORTFOLIO_CSV_HEADER);
        assert_eq!(lines.len(), 6, "header plus five rows");
    }

    #[test]
    fn test_portfolio_csv_numbers_unformatted() {
        let csv = portfolio_table_csv(&fixtures::portfolio_table());
        let first_row = csv.lines().nth(1).expect("first data row");

        assert_eq!(first_row, "M5X 1A9,M,0.15,down,-12,4680");
        assert!(!csv.contains('$'), "no currency symbols in export");
    }

    #[test]
    fn test_portfolio_csv_fixed_column_count() {
        let csv = portfolio_table_csv(&fixtures::portfolio_table());
        for line in csv.lines() {
            assert_eq!(line.split(',').count(), 6, "bad row: {line}");
        }
    }

    #[test]
    fn test_projections_csv() {
        let csv = projections_csv(&fixtures::asset_noi_projection());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], PROJECTIONS_CSV_HEADER);
        assert_eq!(lines[1], "2025,5.2,4.8,4.9");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_empty_series_is_header_only() {
        let csv = projections_csv(&[]);
        assert_eq!(csv, PROJECTIONS_CSV_HEADER);
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_kpi_csv_labels_escaped() {
        let csv = kpi_csv(&fixtures::kpi_rows());
        assert!(csv.lines().count() == 3);
        assert!(csv.contains("Benchmark,M,0.00,flat,0,5200"));
    }
}
