//! Settlement Status Breakdown
//!
//! Splits payables and receivables into Pending vs Settled (Paid/Received)
//! so the two sides can be stacked against each other.

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::{accumulate, admit};
use crate::display::report::{render_table, report_title};
use crate::display::{Label, Labels};
use crate::error::FinboardResult;
use crate::models::{Money, Payable, PayableStatus, Receivable, ReceivableStatus};
use crate::storage::Snapshot;

/// Totals per settlement bucket for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementBuckets {
    pub pending: Money,
    pub settled: Money,
    /// Rows whose status was not recognized
    pub unknown: Money,
}

impl SettlementBuckets {
    /// Sum of all buckets
    pub fn total(&self) -> Money {
        self.pending + self.settled + self.unknown
    }
}

/// Settlement Status Breakdown report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementStatusBreakdown {
    pub payables: SettlementBuckets,
    pub receivables: SettlementBuckets,
    /// Rows left out because they failed validation
    pub skipped_rows: usize,
}

impl SettlementStatusBreakdown {
    /// Generate the breakdown
    pub fn generate(payables: &Snapshot<Payable>, receivables: &Snapshot<Receivable>) -> Self {
        let mut rejected = 0;

        let mut payable_buckets = SettlementBuckets::default();
        for payable in payables.iter() {
            if !admit("payables", payable.id, payable.amount, &mut rejected) {
                continue;
            }
            let bucket = match payable.status {
                PayableStatus::Pending => &mut payable_buckets.pending,
                PayableStatus::Paid => &mut payable_buckets.settled,
                PayableStatus::Unknown(_) => &mut payable_buckets.unknown,
            };
            accumulate(bucket, "payables", payable.id, payable.amount, &mut rejected);
        }

        let mut receivable_buckets = SettlementBuckets::default();
        for receivable in receivables.iter() {
            if !admit("receivables", receivable.id, receivable.amount, &mut rejected) {
                continue;
            }
            let bucket = match receivable.status {
                ReceivableStatus::Pending => &mut receivable_buckets.pending,
                ReceivableStatus::Received => &mut receivable_buckets.settled,
                ReceivableStatus::Unknown(_) => &mut receivable_buckets.unknown,
            };
            accumulate(bucket, "receivables", receivable.id, receivable.amount, &mut rejected);
        }

        Self {
            payables: payable_buckets,
            receivables: receivable_buckets,
            skipped_rows: payables.skipped + receivables.skipped + rejected,
        }
    }

    fn has_unknown(&self) -> bool {
        !self.payables.unknown.is_zero() || !self.receivables.unknown.is_zero()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, labels: &Labels) -> String {
        let mut output = report_title(labels.text(Label::StatusTitle));

        let mut rows = vec![
            vec![
                labels.text(Label::Pending).to_string(),
                labels.money(self.payables.pending),
                labels.money(self.receivables.pending),
            ],
            vec![
                labels.text(Label::Settled).to_string(),
                labels.money(self.payables.settled),
                labels.money(self.receivables.settled),
            ],
        ];
        if self.has_unknown() {
            rows.push(vec![
                labels.text(Label::Unknown).to_string(),
                labels.money(self.payables.unknown),
                labels.money(self.receivables.unknown),
            ]);
        }
        rows.push(vec![
            labels.text(Label::Total).to_string(),
            labels.money(self.payables.total()),
            labels.money(self.receivables.total()),
        ]);

        output.push_str(&render_table(
            &[
                labels.text(Label::Status),
                labels.text(Label::Payables),
                labels.text(Label::Receivables),
            ],
            rows,
        ));
        output.push('\n');

        if self.skipped_rows > 0 {
            output.push_str(&format!(
                "{}: {}\n",
                labels.text(Label::SkippedRows),
                self.skipped_rows
            ));
        }
        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinboardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["bucket", "payables", "receivables"])?;
        let buckets = [
            ("pending", self.payables.pending, self.receivables.pending),
            ("settled", self.payables.settled, self.receivables.settled),
            ("unknown", self.payables.unknown, self.receivables.unknown),
        ];
        for (name, payable, receivable) in buckets {
            csv.write_record([
                name.to_string(),
                format!("{:.2}", payable.to_f64()),
                format!("{:.2}", receivable.to_f64()),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}
