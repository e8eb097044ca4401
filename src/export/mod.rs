//! Export module for finboard
//!
//! Writes any report, or the whole dashboard, to a file:
//! - CSV: one table per report (spreadsheet-compatible)
//! - JSON: the typed report inside a versioned envelope
//! - YAML: the same envelope, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_dashboard_csv;
pub use self::json::{export_json, ReportExport, AMOUNT_UNIT, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::display::Labels;
use crate::error::{FinboardError, FinboardResult};
use crate::reports::{
    CashFlowSummary, CurrentMonthComparison, DashboardReport, Forecast, SettlementStatusBreakdown,
    SupplierConcentration, TopClientsByRevenue,
};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV tables
    #[default]
    Csv,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FinboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(FinboardError::Validation(format!(
                "Unsupported export format: {}. Use csv, json or yaml",
                other
            ))),
        }
    }
}

/// A report that can be printed or exported
pub trait ReportDocument: Serialize {
    /// Stable identifier written into export envelopes
    fn report_name(&self) -> &'static str;

    /// Text for the terminal
    fn render(&self, labels: &Labels) -> String;

    /// CSV rendition
    fn write_csv<W: Write>(&self, writer: &mut W) -> FinboardResult<()>;
}

macro_rules! report_document {
    ($report:ty, $name:literal) => {
        impl ReportDocument for $report {
            fn report_name(&self) -> &'static str {
                $name
            }

            fn render(&self, labels: &Labels) -> String {
                self.format_terminal(labels)
            }

            fn write_csv<W: Write>(&self, writer: &mut W) -> FinboardResult<()> {
                self.export_csv(writer)
            }
        }
    };
}

report_document!(CashFlowSummary, "cash-flow");
report_document!(SupplierConcentration, "suppliers");
report_document!(SettlementStatusBreakdown, "status");
report_document!(TopClientsByRevenue, "top-clients");
report_document!(CurrentMonthComparison, "month");
report_document!(Forecast, "forecast");
report_document!(DashboardReport, "dashboard");

/// Write a report in the requested format
pub fn export_report<R, W>(report: &R, format: ExportFormat, writer: &mut W) -> FinboardResult<()>
where
    R: ReportDocument,
    W: Write,
{
    match format {
        ExportFormat::Csv => report.write_csv(writer),
        ExportFormat::Json => export_json(report, writer, true),
        ExportFormat::Yaml => export_yaml(report, writer),
    }
}
