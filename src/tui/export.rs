//! CSV export for TUI pages and the `export` CLI command.
//!
//! File writing never panics; failures become status messages.

use crate::error::{ArcError, ErrorContext, ExportErrorKind, Result};
use crate::model::{KpiRow, NoiPoint, PortfolioRow};
use crate::reports;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    pub path: PathBuf,
    pub success: bool,
    pub message: String,
}

/// Export the portfolio performance table to a timestamped CSV file.
pub fn export_portfolio(rows: &[PortfolioRow], output_dir: Option<&Path>) -> ExportResult {
    let path = resolve_path(output_dir, "arc_portfolio");
    write_export(
        "portfolio table",
        &path,
        &reports::portfolio_table_csv(rows),
        rows.len(),
    )
}

/// Export an asset's NOI projection series to a timestamped CSV file.
pub fn export_projections(series: &[NoiPoint], output_dir: Option<&Path>) -> ExportResult {
    let path = resolve_path(output_dir, "arc_projections");
    write_export(
        "projection series",
        &path,
        &reports::projections_csv(series),
        series.len(),
    )
}

/// Export the asset-vs-benchmark KPI table to a timestamped CSV file.
pub fn export_kpis(rows: &[KpiRow], output_dir: Option<&Path>) -> ExportResult {
    let path = resolve_path(output_dir, "arc_kpis");
    write_export("KPI table", &path, &reports::kpi_csv(rows), rows.len())
}

fn resolve_path(output_dir: Option<&Path>, stem: &str) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("{stem}_{timestamp}.csv");
    output_dir.map_or_else(|| PathBuf::from(&filename), |dir| dir.join(&filename))
}

fn write_export(what: &str, path: &Path, content: &str, row_count: usize) -> ExportResult {
    match write_to_file(what, path, content, row_count) {
        Ok(()) => ExportResult {
            path: path.to_path_buf(),
            success: true,
            message: format!("Exported to {}", path.display()),
        },
        Err(e) => ExportResult {
            path: path.to_path_buf(),
            success: false,
            message: e.to_string(),
        },
    }
}

fn write_to_file(what: &str, path: &Path, content: &str, row_count: usize) -> Result<()> {
    if row_count == 0 {
        return Err(ArcError::export(
            what,
            ExportErrorKind::EmptyExport("no rows to write".to_string()),
        ));
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.is_dir() {
            return Err(ArcError::export(
                what,
                ExportErrorKind::MissingOutputDir(dir.display().to_string()),
            ));
        }
    }

    let mut file = File::create(path)
        .map_err(|e| ArcError::io(path, e))
        .with_context(|| format!("creating the {what} export file"))?;
    file.write_all(content.as_bytes()).map_err(|e| {
        ArcError::export(what, ExportErrorKind::WriteFailed(e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[test]
    fn test_export_portfolio_writes_csv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = export_portfolio(&fixtures::portfolio_table(), Some(dir.path()));

        assert!(result.success, "{}", result.message);
        let content = std::fs::read_to_string(&result.path).expect("read back");
        assert!(content.starts_with(reports::PORTFOLIO_CSV_HEADER));
        assert!(content.contains("M5X 1A9"));
    }

    #[test]
    fn test_export_projections_writes_csv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = export_projections(&fixtures::asset_noi_projection(), Some(dir.path()));

        assert!(result.success, "{}", result.message);
        let content = std::fs::read_to_string(&result.path).expect("read back");
        assert!(content.starts_with(reports::PROJECTIONS_CSV_HEADER));
    }

    #[test]
    fn test_export_to_missing_dir_reports_failure() {
        let result = export_portfolio(
            &fixtures::portfolio_table(),
            Some(Path::new("/definitely/not/a/dir")),
        );
        assert!(!result.success);
        assert!(
            result.message.contains("Output directory does not exist"),
            "got: {}",
            result.message
        );
        assert!(result.message.contains("/definitely/not/a/dir"));
    }

    #[test]
    fn test_export_empty_series_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = export_projections(&[], Some(dir.path()));

        assert!(!result.success);
        assert!(
            result.message.contains("Nothing to export"),
            "got: {}",
            result.message
        );
        assert!(!result.path.exists(), "no file should be created");
    }

    #[test]
    fn test_write_failures_are_classified() {
        let err = write_to_file("KPI table", Path::new("/nope/out.csv"), "a,b\n", 1)
            .expect_err("missing dir must fail");
        assert!(matches!(
            err,
            ArcError::Export {
                source: ExportErrorKind::MissingOutputDir(_),
                ..
            }
        ));

        let err = write_to_file("KPI table", Path::new("out.csv"), "a,b\n", 0)
            .expect_err("empty export must fail");
        assert!(matches!(
            err,
            ArcError::Export {
                source: ExportErrorKind::EmptyExport(_),
                ..
            }
        ));
    }
}
