//! Cash Flow Summary
//!
//! Totals ledger entries per kind. Buckets come out in canonical order
//! (Revenue, Expense, then unknown kinds in the order first seen).

use std::collections::HashMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use super::{accumulate, admit};
use crate::display::report::{format_bar, format_toned, render_table, report_title, BAR_WIDTH};
use crate::display::{Label, Labels};
use crate::error::FinboardResult;
use crate::models::{EntryKind, LedgerEntry, Money};
use crate::storage::Snapshot;

/// Total for one ledger kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindTotal {
    /// Ledger kind (unknown kinds keep their first-seen spelling)
    pub kind: EntryKind,
    /// Sum of amounts
    pub total: Money,
    /// Number of entries
    pub entry_count: usize,
}

impl KindTotal {
    /// Revenue renders as the positive bucket; everything else as negative
    pub fn is_positive(&self) -> bool {
        self.kind.is_revenue()
    }

    /// Display text for this bucket's kind
    pub fn label(&self, labels: &Labels) -> String {
        match &self.kind {
            EntryKind::Revenue => labels.text(Label::Revenue).to_string(),
            EntryKind::Expense => labels.text(Label::Expense).to_string(),
            EntryKind::Unknown(raw) if raw.is_empty() => labels.text(Label::Unknown).to_string(),
            EntryKind::Unknown(raw) => raw.clone(),
        }
    }
}

/// Cash Flow Summary report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    /// One total per kind present in the input
    pub totals: Vec<KindTotal>,
    /// Rows left out because they failed validation
    pub skipped_rows: usize,
}

impl CashFlowSummary {
    /// Generate the summary from a ledger snapshot
    pub fn generate(entries: &Snapshot<LedgerEntry>) -> Self {
        Self::from_entries(entries.iter(), entries.skipped)
    }

    /// Group already-selected entries; `skipped` is carried into the report
    pub(crate) fn from_entries<'a, I>(entries: I, skipped: usize) -> Self
    where
        I: IntoIterator<Item = &'a LedgerEntry>,
    {
        let mut totals: Vec<KindTotal> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rejected = 0;

        for entry in entries {
            if !admit("ledger_entries", entry.id, entry.amount, &mut rejected) {
                continue;
            }

            let slot = *index.entry(entry.kind.group_key()).or_insert_with(|| {
                totals.push(KindTotal {
                    kind: entry.kind.clone(),
                    total: Money::zero(),
                    entry_count: 0,
                });
                totals.len() - 1
            });
            let bucket = &mut totals[slot];
            if accumulate(&mut bucket.total, "ledger_entries", entry.id, entry.amount, &mut rejected) {
                bucket.entry_count += 1;
            }
        }

        // Stable: unknown kinds keep first-seen order among themselves
        totals.sort_by_key(|t| t.kind.rank());

        tracing::debug!(buckets = totals.len(), rejected, "cash flow summary generated");

        Self {
            totals,
            skipped_rows: skipped + rejected,
        }
    }

    /// Total for a kind, zero when absent
    pub fn total_for(&self, kind: &EntryKind) -> Money {
        let key = kind.group_key();
        self.totals
            .iter()
            .find(|t| t.kind.group_key() == key)
            .map(|t| t.total)
            .unwrap_or_default()
    }

    /// Sum over every bucket
    pub fn grand_total(&self) -> Money {
        self.totals.iter().map(|t| t.total).sum()
    }

    /// Check if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Render the bucket rows (shared with the monthly comparison)
    pub(crate) fn format_rows(&self, labels: &Labels) -> String {
        if self.is_empty() {
            return format!("{}\n", labels.text(Label::NoData));
        }

        let max = self
            .totals
            .iter()
            .map(|t| t.total.cents())
            .max()
            .unwrap_or(0) as f64;

        let rows = self
            .totals
            .iter()
            .map(|t| {
                let bar = format_bar(t.total.cents() as f64, max, BAR_WIDTH);
                vec![
                    t.label(labels),
                    labels.money(t.total),
                    format_toned(&bar, t.is_positive()),
                ]
            })
            .collect();

        let mut output = render_table(&[labels.text(Label::Kind), labels.text(Label::Total), ""], rows);
        output.push('\n');
        output
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, labels: &Labels) -> String {
        let mut output = report_title(labels.text(Label::CashFlowTitle));
        output.push_str(&self.format_rows(labels));
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
        csv.write_record(["kind", "total", "entries"])?;
        for t in &self.totals {
            csv.write_record([
                t.kind.to_string(),
                format!("{:.2}", t.total.to_f64()),
                t.entry_count.to_string(),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}
