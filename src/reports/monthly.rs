//! Current Month Comparison
//!
//! Revenue vs expense for the calendar month containing the reference date.

use std::io::Write;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::admit;
use super::cash_flow::CashFlowSummary;
use crate::display::report::report_title;
use crate::display::{Label, Labels};
use crate::error::FinboardResult;
use crate::models::{EntryKind, LedgerEntry, Money};
use crate::storage::Snapshot;

/// Current Month Comparison report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentMonthComparison {
    pub year: i32,
    pub month: u32,
    /// Per-kind totals for entries dated inside the month
    pub summary: CashFlowSummary,
}

impl CurrentMonthComparison {
    /// Generate for the month containing `today`
    pub fn generate(entries: &Snapshot<LedgerEntry>, today: NaiveDate) -> Self {
        let (year, month) = (today.year(), today.month());
        let mut rejected = 0;
        let mut summary = CashFlowSummary::from_entries(
            entries.iter().filter(|e| {
                admit("ledger_entries", e.id, e.amount, &mut rejected)
                    && e.date.year() == year
                    && e.date.month() == month
            }),
            entries.skipped,
        );
        summary.skipped_rows += rejected;

        Self {
            year,
            month,
            summary,
        }
    }

    /// Revenue minus expense for the month
    pub fn balance(&self) -> Money {
        self.summary.total_for(&EntryKind::Revenue) - self.summary.total_for(&EntryKind::Expense)
    }

    /// The month as `YYYY-MM`
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, labels: &Labels) -> String {
        let mut output = report_title(&format!(
            "{} ({})",
            labels.text(Label::MonthTitle),
            self.period()
        ));
        output.push_str(&self.summary.format_rows(labels));
        if !self.summary.is_empty() {
            output.push_str(&format!(
                "{}: {}\n",
                labels.text(Label::Net),
                labels.money(self.balance())
            ));
        }
        if self.summary.skipped_rows > 0 {
            output.push_str(&format!(
                "{}: {}\n",
                labels.text(Label::SkippedRows),
                self.summary.skipped_rows
            ));
        }
        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinboardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["period", "kind", "total", "entries"])?;
        for t in &self.summary.totals {
            csv.write_record([
                self.period(),
                t.kind.to_string(),
                format!("{:.2}", t.total.to_f64()),
                t.entry_count.to_string(),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, kind: EntryKind, units: i64, y: i32, m: u32, d: u32) -> LedgerEntry {
        LedgerEntry::new(
            id,
            kind,
            Money::from_units(units),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_only_current_month_is_counted() {
        let entries: Snapshot<_> = vec![
            entry(1, EntryKind::Revenue, 100, 2024, 3, 1),
            entry(2, EntryKind::Revenue, 50, 2024, 3, 31),
            entry(3, EntryKind::Expense, 30, 2024, 3, 15),
            entry(4, EntryKind::Revenue, 999, 2024, 2, 29),
            entry(5, EntryKind::Expense, 999, 2024, 4, 1),
            entry(6, EntryKind::Revenue, 999, 2023, 3, 15),
        ]
        .into();

        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let report = CurrentMonthComparison::generate(&entries, today);

        assert_eq!(report.period(), "2024-03");
        assert_eq!(report.summary.total_for(&EntryKind::Revenue), Money::from_units(150));
        assert_eq!(report.summary.total_for(&EntryKind::Expense), Money::from_units(30));
        assert_eq!(report.balance(), Money::from_units(120));
    }

    #[test]
    fn test_month_without_entries_is_empty() {
        let entries: Snapshot<_> = vec![entry(1, EntryKind::Revenue, 100, 2024, 1, 10)].into();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let report = CurrentMonthComparison::generate(&entries, today);
        assert!(report.summary.is_empty());
        assert!(report
            .format_terminal(&Labels::default())
            .contains("No data available."));
    }

    #[test]
    fn test_negative_rows_outside_month_are_counted() {
        let entries: Snapshot<_> = vec![
            entry(1, EntryKind::Revenue, -10, 2023, 12, 1),
            entry(2, EntryKind::Expense, -3, 2024, 3, 4),
            entry(3, EntryKind::Revenue, 40, 2024, 3, 5),
        ]
        .into();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let report = CurrentMonthComparison::generate(&entries, today);
        assert_eq!(report.summary.total_for(&EntryKind::Revenue), Money::from_units(40));
        assert_eq!(report.summary.skipped_rows, 2);
    }

    #[test]
    fn test_export_csv_includes_period() {
        let entries: Snapshot<_> = vec![entry(1, EntryKind::Expense, 12, 2024, 3, 2)].into();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let report = CurrentMonthComparison::generate(&entries, today);

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("2024-03,Expense,12.00,1"));
    }
}
