//! CLI commands for reports
//!
//! Reads a dataset from SQLite or a JSON file, computes the requested report
//! and prints it or exports it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};

use crate::config::{FinboardPaths, Settings};
use crate::display::{Labels, Locale};
use crate::error::{FinboardError, FinboardResult};
use crate::export::{export_report, ExportFormat, ReportDocument};
use crate::reports::{
    CashFlowSummary, CurrentMonthComparison, DashboardReport, Forecast, ReportOptions,
    SettlementStatusBreakdown, SupplierConcentration, TopClientsByRevenue,
};
use crate::storage::{DatasetSnapshot, JsonRepository, Repository, SqliteRepository};

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Totals per ledger kind
    CashFlow,
    /// Payables ranked by supplier
    Suppliers,
    /// Pending vs settled payables and receivables
    Status,
    /// Clients ranked by received revenue
    TopClients,
    /// Revenue vs expense for the current month
    Month,
    /// Amounts falling due in the coming days
    Forecast,
    /// Every report at once
    All,
}

/// Arguments of `finboard report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report to generate
    #[arg(value_enum)]
    pub kind: ReportKind,

    /// SQLite database (defaults to the configured data directory)
    #[arg(long, conflicts_with = "data")]
    pub db: Option<PathBuf>,

    /// JSON dataset file to read instead of a database
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub as_of: Option<String>,

    /// Keep only the top N suppliers and clients
    #[arg(long)]
    pub top: Option<usize>,

    /// Export to a file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Label language (en, pt-br)
    #[arg(long)]
    pub locale: Option<String>,
}

/// Handle `finboard report`
pub fn handle_report_command(
    paths: &FinboardPaths,
    settings: &Settings,
    args: ReportArgs,
) -> FinboardResult<()> {
    let as_of = match &args.as_of {
        Some(raw) => parse_as_of(raw)?,
        None => Local::now().date_naive(),
    };

    let mut options = settings.report_options();
    if let Some(top) = args.top {
        options.top_suppliers = top;
        options.top_clients = top;
    }

    let mut labels = settings.labels();
    if let Some(locale) = &args.locale {
        labels.locale = locale.parse::<Locale>()?;
    }

    let snapshot = open_repository(paths, args.db.as_ref(), args.data.as_ref())?.snapshot()?;
    if snapshot.skipped_rows() > 0 {
        tracing::warn!(skipped = snapshot.skipped_rows(), "dataset contains invalid rows");
    }

    let output = Output {
        labels: &labels,
        path: args.output.as_ref(),
        format: args.format,
    };

    match args.kind {
        ReportKind::CashFlow => output.emit(&CashFlowSummary::generate(&snapshot.ledger_entries)),
        ReportKind::Suppliers => output.emit(&SupplierConcentration::generate_top(
            &snapshot.payables,
            options.top_suppliers,
        )),
        ReportKind::Status => output.emit(&SettlementStatusBreakdown::generate(
            &snapshot.payables,
            &snapshot.receivables,
        )),
        ReportKind::TopClients => output.emit(&TopClientsByRevenue::generate_top(
            &snapshot.receivables,
            &snapshot.clients,
            options.top_clients,
        )),
        ReportKind::Month => output.emit(&CurrentMonthComparison::generate(
            &snapshot.ledger_entries,
            as_of,
        )),
        ReportKind::Forecast => output.emit(&Forecast::generate_window(
            &snapshot.payables,
            &snapshot.receivables,
            as_of,
            options.forecast_days,
        )),
        ReportKind::All => output.emit(&dashboard(&snapshot, as_of, &options)),
    }
}

fn dashboard(snapshot: &DatasetSnapshot, as_of: NaiveDate, options: &ReportOptions) -> DashboardReport {
    DashboardReport::from_snapshot(snapshot, as_of, options)
}

fn parse_as_of(raw: &str) -> FinboardResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        FinboardError::Validation(format!(
            "Invalid date '{}': {}. Use YYYY-MM-DD (e.g., 2024-03-15)",
            raw, e
        ))
    })
}

/// Open the selected source: a JSON dataset, or a SQLite database
pub(crate) fn open_repository(
    paths: &FinboardPaths,
    db: Option<&PathBuf>,
    data: Option<&PathBuf>,
) -> FinboardResult<Box<dyn Repository>> {
    if let Some(data) = data {
        return Ok(Box::new(JsonRepository::new(data.clone())));
    }

    let db = db.cloned().unwrap_or_else(|| paths.database_file());
    Ok(Box::new(SqliteRepository::open(&db)?))
}

/// Where and how a report goes
struct Output<'a> {
    labels: &'a Labels,
    path: Option<&'a PathBuf>,
    format: ExportFormat,
}

impl Output<'_> {
    fn emit<R: ReportDocument>(&self, report: &R) -> FinboardResult<()> {
        let Some(path) = self.path else {
            print!("{}", report.render(self.labels));
            return Ok(());
        };

        let file = File::create(path).map_err(|e| {
            FinboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        export_report(report, self.format, &mut writer)?;
        writer.flush()?;

        println!(
            "Report '{}' exported to: {} ({})",
            report.report_name(),
            path.display(),
            self.format
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{RawDataset, RawPayable};
    use tempfile::TempDir;

    fn args(kind: ReportKind) -> ReportArgs {
        ReportArgs {
            kind,
            db: None,
            data: None,
            as_of: Some("2024-03-15".into()),
            top: None,
            output: None,
            format: ExportFormat::Csv,
            locale: None,
        }
    }

    fn dataset(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("dataset.json");
        let dataset = RawDataset {
            payables: vec![RawPayable {
                id: 1,
                supplier: Some("Acme".into()),
                amount: Some(120.0),
                due_date: Some("2024-03-20".into()),
                status: Some("Pending".into()),
            }],
            ..RawDataset::default()
        };
        JsonRepository::new(path.clone()).save(&dataset).unwrap();
        path
    }

    #[test]
    fn test_parse_as_of() {
        assert_eq!(
            parse_as_of("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(parse_as_of("15/03/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_export_to_file() {
        let dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(dir.path().to_path_buf());
        let out = dir.path().join("forecast.csv");

        let mut args = args(ReportKind::Forecast);
        args.data = Some(dataset(&dir));
        args.output = Some(out.clone());

        handle_report_command(&paths, &Settings::default(), args).unwrap();

        let csv = std::fs::read_to_string(out).unwrap();
        assert!(csv.contains("2024-03-15,2024-04-14,120.00,0.00,-120.00"));
    }

    #[test]
    fn test_missing_database_is_storage_unavailable() {
        let dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(dir.path().to_path_buf());

        let err = handle_report_command(&paths, &Settings::default(), args(ReportKind::All))
            .unwrap_err();
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn test_bad_locale_is_rejected() {
        let dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(dir.path().to_path_buf());
        let mut args = args(ReportKind::Status);
        args.data = Some(dataset(&dir));
        args.locale = Some("fr".into());

        let err = handle_report_command(&paths, &Settings::default(), args).unwrap_err();
        assert!(err.is_validation());
    }
}
