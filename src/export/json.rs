//! JSON Export functionality
//!
//! Wraps a report in an envelope carrying a schema version and timestamp.
//! Amounts inside `report` are integer cents, as `amount_unit` states.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ReportDocument;
use crate::error::FinboardResult;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.1.0";

/// Unit of every amount in an exported report
pub const AMOUNT_UNIT: &str = "cents";

/// Versioned export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport<T> {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Which report `report` holds
    pub report_name: String,

    /// Unit of the amounts in `report`
    #[serde(default = "default_amount_unit")]
    pub amount_unit: String,

    pub report: T,
}

fn default_amount_unit() -> String {
    AMOUNT_UNIT.to_string()
}

impl<'a, R: ReportDocument> ReportExport<&'a R> {
    /// Wrap a report for export
    pub fn new(report: &'a R) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            report_name: report.report_name().to_string(),
            amount_unit: AMOUNT_UNIT.to_string(),
            report,
        }
    }
}

/// Export a report to JSON
pub fn export_json<R, W>(report: &R, writer: &mut W, pretty: bool) -> FinboardResult<()>
where
    R: ReportDocument,
    W: Write,
{
    let export = ReportExport::new(report);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer)?;

    Ok(())
}
