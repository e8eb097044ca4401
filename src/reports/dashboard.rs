//! Dashboard bundle
//!
//! Fetches the four snapshots once and computes all six reports from them,
//! so figures that appear in more than one report agree with each other.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    CashFlowSummary, CurrentMonthComparison, Forecast, ReportOptions, SettlementStatusBreakdown,
    SupplierConcentration, TopClientsByRevenue,
};
use crate::display::report::{report_title, separator, REPORT_WIDTH};
use crate::display::{Label, Labels};
use crate::error::FinboardResult;
use crate::export::export_dashboard_csv;
use crate::storage::{DatasetSnapshot, Repository};

/// All six reports computed from one dataset read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    /// Reference date for the monthly comparison and the forecast
    pub as_of: NaiveDate,
    pub cash_flow: CashFlowSummary,
    pub suppliers: SupplierConcentration,
    pub settlement: SettlementStatusBreakdown,
    pub top_clients: TopClientsByRevenue,
    pub current_month: CurrentMonthComparison,
    pub forecast: Forecast,
    /// Invalid rows across the four snapshots
    pub skipped_rows: usize,
}

impl DashboardReport {
    /// Read the repository once and compute every report
    pub fn generate<R: Repository>(
        repo: &R,
        as_of: NaiveDate,
        options: &ReportOptions,
    ) -> FinboardResult<Self> {
        let snapshot = repo.snapshot()?;
        Ok(Self::from_snapshot(&snapshot, as_of, options))
    }

    /// Compute every report from an already-read dataset
    pub fn from_snapshot(
        snapshot: &DatasetSnapshot,
        as_of: NaiveDate,
        options: &ReportOptions,
    ) -> Self {
        let report = Self {
            generated_at: Utc::now(),
            as_of,
            cash_flow: CashFlowSummary::generate(&snapshot.ledger_entries),
            suppliers: SupplierConcentration::generate_top(
                &snapshot.payables,
                options.top_suppliers,
            ),
            settlement: SettlementStatusBreakdown::generate(
                &snapshot.payables,
                &snapshot.receivables,
            ),
            top_clients: TopClientsByRevenue::generate_top(
                &snapshot.receivables,
                &snapshot.clients,
                options.top_clients,
            ),
            current_month: CurrentMonthComparison::generate(&snapshot.ledger_entries, as_of),
            forecast: Forecast::generate_window(
                &snapshot.payables,
                &snapshot.receivables,
                as_of,
                options.forecast_days,
            ),
            skipped_rows: snapshot.skipped_rows(),
        };

        tracing::debug!(
            clients = snapshot.clients.len(),
            payables = snapshot.payables.len(),
            receivables = snapshot.receivables.len(),
            ledger_entries = snapshot.ledger_entries.len(),
            "dashboard generated"
        );
        report
    }

    /// Rows dropped while loading the dataset
    ///
    /// Each collection is counted once even though several reports consume it.
    pub fn total_skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Export every report to CSV, one section per report
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinboardResult<()> {
        export_dashboard_csv(self, writer)
    }

    /// Format every report for terminal display
    pub fn format_terminal(&self, labels: &Labels) -> String {
        let mut output = report_title(&format!(
            "{} ({})",
            labels.text(Label::DashboardTitle),
            self.as_of
        ));
        output.push('\n');

        let sections = [
            self.cash_flow.format_terminal(labels),
            self.suppliers.format_terminal(labels),
            self.settlement.format_terminal(labels),
            self.top_clients.format_terminal(labels),
            self.current_month.format_terminal(labels),
            self.forecast.format_terminal(labels),
        ];
        output.push_str(&sections.join(&format!("{}\n", separator(REPORT_WIDTH))));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinboardError;
    use crate::models::{
        Client, EntryKind, LedgerEntry, Money, Payable, PayableStatus, Receivable,
        ReceivableStatus,
    };
    use crate::storage::{InMemoryRepository, Snapshot};
    use std::thread;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn repository() -> InMemoryRepository {
        InMemoryRepository::new()
            .with_clients(vec![Client::new(1, "Ana"), Client::new(2, "Bruno")])
            .with_payables(vec![
                Payable::new(1, "Acme", Money::from_units(100), day(2024, 3, 20), PayableStatus::Pending),
                Payable::new(2, "Beta", Money::from_units(50), day(2024, 2, 1), PayableStatus::Paid),
            ])
            .with_receivables(vec![
                Receivable::new(1, 1, Money::from_units(200), day(2024, 3, 25), ReceivableStatus::Pending),
                Receivable::new(2, 2, Money::from_units(300), day(2024, 1, 5), ReceivableStatus::Received),
            ])
            .with_ledger_entries(vec![
                LedgerEntry::new(1, EntryKind::Revenue, Money::from_units(100), day(2024, 3, 2)),
                LedgerEntry::new(2, EntryKind::Expense, Money::from_units(40), day(2024, 3, 3)),
                LedgerEntry::new(3, EntryKind::Revenue, Money::from_units(60), day(2024, 2, 9)),
            ])
    }

    #[test]
    fn test_generate_bundles_all_reports() {
        let as_of = day(2024, 3, 15);
        let report = DashboardReport::generate(&repository(), as_of, &ReportOptions::default()).unwrap();

        assert_eq!(report.as_of, as_of);
        assert_eq!(report.cash_flow.total_for(&EntryKind::Revenue), Money::from_units(160));
        assert_eq!(report.suppliers.suppliers.len(), 2);
        assert_eq!(report.settlement.payables.pending, Money::from_units(100));
        assert_eq!(report.settlement.receivables.settled, Money::from_units(300));
        assert_eq!(report.top_clients.clients[0].name, "Bruno");
        assert_eq!(report.current_month.balance(), Money::from_units(60));
        assert_eq!(report.forecast.payables_due, Money::from_units(100));
        assert_eq!(report.forecast.receivables_due, Money::from_units(200));
        assert_eq!(report.total_skipped_rows(), 0);
    }

    #[test]
    fn test_options_are_applied() {
        let options = ReportOptions {
            top_suppliers: 1,
            top_clients: 1,
            forecast_days: 5,
        };
        let report = DashboardReport::generate(&repository(), day(2024, 3, 15), &options).unwrap();

        assert_eq!(report.suppliers.suppliers.len(), 1);
        assert_eq!(report.suppliers.excluded_suppliers, 1);
        assert_eq!(report.top_clients.clients.len(), 1);
        assert_eq!(report.forecast.window_end, day(2024, 3, 20));
        assert_eq!(report.forecast.receivables_due, Money::zero());
    }

    #[test]
    fn test_storage_unavailable_propagates() {
        let repo = InMemoryRepository::unavailable("database is locked");
        let err = DashboardReport::generate(&repo, day(2024, 3, 15), &ReportOptions::default())
            .unwrap_err();
        assert!(err.is_storage_unavailable());
        assert!(matches!(err, FinboardError::StorageUnavailable(ref r) if r == "database is locked"));
    }

    #[test]
    fn test_skipped_rows_counted_once_per_collection() {
        let snapshot = DatasetSnapshot {
            clients: Snapshot::new(vec![], 1),
            payables: Snapshot::new(vec![], 2),
            receivables: Snapshot::new(vec![], 3),
            ledger_entries: Snapshot::new(vec![], 4),
        };
        let report = DashboardReport::from_snapshot(&snapshot, day(2024, 3, 15), &ReportOptions::default());
        assert_eq!(report.total_skipped_rows(), 10);
    }

    #[test]
    fn test_reports_computed_on_separate_threads_match() {
        let snapshot = repository().snapshot().unwrap();
        let as_of = day(2024, 3, 15);
        let expected = DashboardReport::from_snapshot(&snapshot, as_of, &ReportOptions::default());

        thread::scope(|scope| {
            let cash_flow = scope.spawn(|| CashFlowSummary::generate(&snapshot.ledger_entries));
            let suppliers = scope.spawn(|| SupplierConcentration::generate(&snapshot.payables));
            let settlement = scope.spawn(|| {
                SettlementStatusBreakdown::generate(&snapshot.payables, &snapshot.receivables)
            });
            let top_clients = scope
                .spawn(|| TopClientsByRevenue::generate(&snapshot.receivables, &snapshot.clients));
            let month = scope.spawn(|| CurrentMonthComparison::generate(&snapshot.ledger_entries, as_of));
            let forecast =
                scope.spawn(|| Forecast::generate(&snapshot.payables, &snapshot.receivables, as_of));

            assert_eq!(cash_flow.join().unwrap(), expected.cash_flow);
            assert_eq!(suppliers.join().unwrap(), expected.suppliers);
            assert_eq!(settlement.join().unwrap(), expected.settlement);
            assert_eq!(top_clients.join().unwrap(), expected.top_clients);
            assert_eq!(month.join().unwrap(), expected.current_month);
            assert_eq!(forecast.join().unwrap(), expected.forecast);
        });
    }

    #[test]
    fn test_format_terminal_contains_every_section() {
        let report =
            DashboardReport::generate(&repository(), day(2024, 3, 15), &ReportOptions::default())
                .unwrap();
        let output = report.format_terminal(&Labels::default());
        for title in [
            "Financial Dashboard",
            "Cash Flow Summary",
            "Payables by Supplier",
            "Payable and Receivable Status",
            "Top Clients by Revenue",
            "Revenue vs Expense - Current Month",
            "Cash Flow Forecast",
        ] {
            assert!(output.contains(title), "missing section {title}");
        }
    }
}
