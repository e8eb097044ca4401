//! CSV Export functionality
//!
//! Single reports write their own table. The dashboard writes every table in
//! turn, each preceded by a `# name` line and separated by a blank line.

use std::io::Write;

use crate::error::FinboardResult;
use crate::reports::DashboardReport;

/// Export every report of the dashboard to CSV
pub fn export_dashboard_csv<W: Write>(report: &DashboardReport, writer: &mut W) -> FinboardResult<()> {
    writeln!(writer, "# as_of {}", report.as_of)?;

    writeln!(writer, "\n# cash-flow")?;
    report.cash_flow.export_csv(writer)?;

    writeln!(writer, "\n# suppliers")?;
    report.suppliers.export_csv(writer)?;

    writeln!(writer, "\n# status")?;
    report.settlement.export_csv(writer)?;

    writeln!(writer, "\n# top-clients")?;
    report.top_clients.export_csv(writer)?;

    writeln!(writer, "\n# month")?;
    report.current_month.export_csv(writer)?;

    writeln!(writer, "\n# forecast")?;
    report.forecast.export_csv(writer)?;

    Ok(())
}
