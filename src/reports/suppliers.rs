//! Supplier Concentration
//!
//! Ranks suppliers by the total amount of their payables and keeps the top N.
//! Suppliers past the cut are not folded into an "other" row; they are only
//! summarized by count and amount.

use std::collections::HashMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use super::{accumulate, admit, rank_totals, NamedTotal, DEFAULT_TOP_SUPPLIERS};
use crate::display::report::{
    format_bar, format_percentage, percentage_of, render_table, report_title, truncate, BAR_WIDTH,
};
use crate::display::{Label, Labels};
use crate::error::FinboardResult;
use crate::models::{Money, Payable};
use crate::storage::Snapshot;

/// Supplier Concentration report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierConcentration {
    /// Top suppliers, largest total first
    pub suppliers: Vec<NamedTotal>,
    /// The N the ranking was cut at
    pub top_n: usize,
    /// Suppliers left out of the ranking
    pub excluded_suppliers: usize,
    /// Combined total of the suppliers left out
    pub excluded_total: Money,
    /// Rows left out because they failed validation
    pub skipped_rows: usize,
}

impl SupplierConcentration {
    /// Generate with the default cut of four suppliers
    pub fn generate(payables: &Snapshot<Payable>) -> Self {
        Self::generate_top(payables, DEFAULT_TOP_SUPPLIERS)
    }

    /// Generate keeping the `top_n` largest suppliers
    pub fn generate_top(payables: &Snapshot<Payable>, top_n: usize) -> Self {
        let mut totals: HashMap<String, Money> = HashMap::new();
        let mut rejected = 0;

        for payable in payables.iter() {
            if !admit("payables", payable.id, payable.amount, &mut rejected) {
                continue;
            }
            let total = totals.entry(payable.supplier.clone()).or_default();
            accumulate(total, "payables", payable.id, payable.amount, &mut rejected);
        }

        let mut suppliers = rank_totals(totals);
        let excluded = if suppliers.len() > top_n {
            suppliers.split_off(top_n)
        } else {
            Vec::new()
        };

        tracing::debug!(
            kept = suppliers.len(),
            excluded = excluded.len(),
            "supplier concentration generated"
        );

        Self {
            suppliers,
            top_n,
            excluded_suppliers: excluded.len(),
            excluded_total: excluded.iter().map(|s| s.total).sum(),
            skipped_rows: payables.skipped + rejected,
        }
    }

    /// Combined total of the suppliers shown
    pub fn shown_total(&self) -> Money {
        self.suppliers.iter().map(|s| s.total).sum()
    }

    /// Check if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, labels: &Labels) -> String {
        let mut output = report_title(&format!(
            "{} (Top {})",
            labels.text(Label::SupplierTitle),
            self.top_n
        ));

        if self.is_empty() {
            output.push_str(labels.text(Label::NoData));
            output.push('\n');
            return output;
        }

        // Shares are of the shown suppliers, like the pie chart they replace
        let shown = self.shown_total().cents();
        let max = self.suppliers.first().map(|s| s.total.cents()).unwrap_or(0) as f64;

        let rows = self
            .suppliers
            .iter()
            .map(|s| {
                vec![
                    truncate(&s.name, 32),
                    labels.money(s.total),
                    format_percentage(percentage_of(s.total.cents(), shown)),
                    format_bar(s.total.cents() as f64, max, BAR_WIDTH),
                ]
            })
            .collect();

        output.push_str(&render_table(
            &[labels.text(Label::Supplier), labels.text(Label::Total), "%", ""],
            rows,
        ));
        output.push('\n');

        if self.excluded_suppliers > 0 {
            output.push_str(&format!(
                "{}: {} ({})\n",
                labels.text(Label::ExcludedSuppliers),
                self.excluded_suppliers,
                labels.money(self.excluded_total)
            ));
        }
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
        csv.write_record(["rank", "supplier", "total"])?;
        for (rank, s) in self.suppliers.iter().enumerate() {
            csv.write_record([
                (rank + 1).to_string(),
                s.name.clone(),
                format!("{:.2}", s.total.to_f64()),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayableStatus;
    use chrono::NaiveDate;

    fn payable(id: i64, supplier: &str, units: i64) -> Payable {
        Payable::new(
            id,
            supplier,
            Money::from_units(units),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            PayableStatus::Pending,
        )
    }

    fn five_suppliers() -> Snapshot<Payable> {
        vec![
            payable(1, "A", 500),
            payable(2, "B", 300),
            payable(3, "C", 900),
            payable(4, "D", 100),
            payable(5, "E", 700),
        ]
        .into()
    }

    #[test]
    fn test_top_four_drops_smallest() {
        let report = SupplierConcentration::generate(&five_suppliers());

        let totals: Vec<i64> = report.suppliers.iter().map(|s| s.total.units()).collect();
        assert_eq!(totals, vec![900, 700, 500, 300]);
        assert!(report.suppliers.iter().all(|s| s.name != "D"));
        assert_eq!(report.excluded_suppliers, 1);
        assert_eq!(report.excluded_total, Money::from_units(100));
    }

    #[test]
    fn test_included_amounts_dominate_excluded() {
        let payables: Snapshot<_> = vec![
            payable(1, "A", 50),
            payable(2, "A", 60),
            payable(3, "B", 100),
            payable(4, "C", 5),
            payable(5, "D", 120),
            payable(6, "E", 1),
        ]
        .into();
        let report = SupplierConcentration::generate_top(&payables, 2);

        assert!(report.suppliers.len() <= 2);
        let smallest_included = report.suppliers.iter().map(|s| s.total).min().unwrap();
        let all = SupplierConcentration::generate_top(&payables, usize::MAX);
        for excluded in all.suppliers.iter().skip(2) {
            assert!(smallest_included >= excluded.total);
        }
    }

    #[test]
    fn test_amounts_are_summed_per_supplier() {
        let payables: Snapshot<_> = vec![
            payable(1, "Acme", 10),
            payable(2, "Acme", 15),
            payable(3, "Beta", 20),
        ]
        .into();
        let report = SupplierConcentration::generate(&payables);
        assert_eq!(report.suppliers[0].name, "Acme");
        assert_eq!(report.suppliers[0].total, Money::from_units(25));
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let payables: Snapshot<_> = vec![payable(1, "Zeta", 10), payable(2, "Alfa", 10)].into();
        let report = SupplierConcentration::generate(&payables);
        assert_eq!(report.suppliers[0].name, "Alfa");
        assert_eq!(report.suppliers[1].name, "Zeta");
    }

    #[test]
    fn test_empty_input() {
        let report = SupplierConcentration::generate(&Snapshot::default());
        assert!(report.is_empty());
        assert_eq!(report.excluded_suppliers, 0);
    }

    #[test]
    fn test_zero_top_n_keeps_nothing() {
        let report = SupplierConcentration::generate_top(&five_suppliers(), 0);
        assert!(report.is_empty());
        assert_eq!(report.excluded_suppliers, 5);
    }

    #[test]
    fn test_format_terminal_mentions_excluded() {
        let report = SupplierConcentration::generate(&five_suppliers());
        let output = report.format_terminal(&Labels::default());
        assert!(output.contains("Top 4"));
        assert!(output.contains("Suppliers not shown: 1"));
    }

    #[test]
    fn test_total_overflow_skips_row_instead_of_panicking() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        let payables: Snapshot<_> = vec![
            Payable::new(1, "Acme", huge, due, PayableStatus::Pending),
            Payable::new(2, "Acme", huge, due, PayableStatus::Pending),
            Payable::new(3, "Beta", huge, due, PayableStatus::Pending),
        ]
        .into();

        let report = SupplierConcentration::generate(&payables);
        assert_eq!(report.suppliers.len(), 2);
        assert!(report.suppliers.iter().all(|s| s.total == huge));
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(report.shown_total(), Money::from_cents(i64::MAX));
    }
}
