//! YAML Export functionality

use std::io::Write;

use super::json::ReportExport;
use super::ReportDocument;
use crate::error::{FinboardError, FinboardResult};

/// Export a report to YAML format
pub fn export_yaml<R, W>(report: &R, writer: &mut W) -> FinboardResult<()>
where
    R: ReportDocument,
    W: Write,
{
    let export = ReportExport::new(report);

    writeln!(writer, "# finboard report export: {}", export.report_name)?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer, "# Amounts are in {}", export.amount_unit)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinboardError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::SettlementStatusBreakdown;
    use crate::storage::Snapshot;

    #[test]
    fn test_yaml_export() {
        let report = SettlementStatusBreakdown::generate(&Snapshot::default(), &Snapshot::default());

        let mut output = Vec::new();
        export_yaml(&report, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# finboard report export: status"));
        assert!(yaml.contains("report_name: status"));
        assert!(yaml.contains("pending: 0"));
        assert!(yaml.contains("amount_unit: cents"));
    }
}
