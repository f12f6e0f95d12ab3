//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. Each returns the process exit
//! code so main can decide when to call `std::process::exit`.

use crate::config::AppConfig;
use crate::model::{fixtures, FilterCategory};
use crate::session::PortfolioFilters;
use crate::tui::{
    export_kpis, export_portfolio, export_projections, run_tui, set_theme, App, Theme,
};
use crate::error::ArcError;
use anyhow::Result;
use std::path::PathBuf;

/// What the `export` subcommand writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Postal-code exposure table
    Portfolio,
    /// Ten-year NOI projection series
    Projections,
    /// Asset-vs-benchmark KPI table
    Kpi,
}

impl ExportKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "portfolio" => Some(Self::Portfolio),
            "projections" => Some(Self::Projections),
            "kpi" | "kpis" => Some(Self::Kpi),
            _ => None,
        }
    }
}

/// Run the interactive dashboard.
pub fn run_dashboard(config: &AppConfig) -> Result<i32> {
    set_theme(Theme::from_name(&config.tui.theme));
    let mut app = App::new(config);
    run_tui(&mut app)?;
    Ok(0)
}

/// Write a CSV snapshot without entering the TUI.
pub fn run_export(
    kind: ExportKind,
    output_dir: Option<PathBuf>,
    config: &AppConfig,
) -> Result<i32> {
    let dir = output_dir.or_else(|| config.export.output_dir.clone());

    let result = match kind {
        ExportKind::Portfolio => export_portfolio(&fixtures::portfolio_table(), dir.as_deref()),
        ExportKind::Projections => {
            export_projections(&fixtures::portfolio_noi_projection(), dir.as_deref())
        }
        ExportKind::Kpi => export_kpis(&fixtures::kpi_rows(), dir.as_deref()),
    };

    if result.success {
        println!("{}", result.message);
        Ok(0)
    } else {
        eprintln!("{}", result.message);
        Ok(1)
    }
}

/// Print the derived filter summary for a set of `category=value` specs.
pub fn run_summary(specs: &[String], config: &AppConfig) -> Result<i32> {
    let catalog = fixtures::filter_catalog();
    let mut filters = PortfolioFilters::new();

    for spec in specs {
        let Some((key, value)) = spec.split_once('=') else {
            return Err(ArcError::validation(format!(
                "invalid filter spec '{spec}': expected category=value"
            ))
            .into());
        };
        let Some(category) = FilterCategory::parse(key) else {
            return Err(ArcError::validation(format!(
                "unknown category '{key}': expected one of {}",
                FilterCategory::ALL.map(FilterCategory::key).join(", ")
            ))
            .into());
        };
        if catalog.find(category, value).is_none() {
            return Err(ArcError::validation(format!(
                "unknown {key} option '{value}'"
            ))
            .into());
        }
        filters.toggle(category, value);
    }

    let summary = filters.summary(&config.summary);
    println!("Active filters:    {}", filters.active_count());
    println!("Matching assets:   {}", summary.assets_match);
    println!("Portfolio value:   ${:.1}B", summary.total_value_billions);
    println!("Low risk share:    {}%", summary.low_risk_pct);
    println!("High risk share:   {}%", summary.high_risk_pct);

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_kind_parse() {
        assert_eq!(ExportKind::parse("portfolio"), Some(ExportKind::Portfolio));
        assert_eq!(
            ExportKind::parse("PROJECTIONS"),
            Some(ExportKind::Projections)
        );
        assert_eq!(ExportKind::parse("kpi"), Some(ExportKind::Kpi));
        assert_eq!(ExportKind::parse("table"), None);
    }

    #[test]
    fn test_summary_with_valid_filters() {
        let config = AppConfig::default();
        let code = run_summary(
            &[
                "geography=toronto".to_string(),
                "property-type=office".to_string(),
            ],
            &config,
        )
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_summary_rejects_unknown_category() {
        let config = AppConfig::default();
        let err = run_summary(&["postal=m5x".to_string()], &config).unwrap_err();
        assert!(err.to_string().contains("unknown category"));
        assert!(
            matches!(err.downcast_ref::<ArcError>(), Some(ArcError::Validation(_))),
            "bad specs must surface as validation errors"
        );
    }

    #[test]
    fn test_summary_rejects_malformed_spec() {
        let config = AppConfig::default();
        let err = run_summary(&["geography".to_string()], &config).unwrap_err();
        assert!(err.to_string().contains("expected category=value"));
    }

    #[test]
    fn test_export_to_missing_dir_is_nonzero() {
        let config = AppConfig::default();
        let code = run_export(
            ExportKind::Portfolio,
            Some(PathBuf::from("/definitely/not/a/dir")),
            &config,
        )
        .unwrap();
        assert_eq!(code, 1);
    }
}
