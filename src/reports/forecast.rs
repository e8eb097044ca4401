//! Cash Flow Forecast
//!
//! Sums payables and receivables falling due in the window
//! `[today, today + days]`, both ends inclusive. Settlement status is not
//! considered: a row already paid but dated inside the window still counts.

use std::io::Write;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{accumulate, admit, DEFAULT_FORECAST_DAYS};
use crate::display::report::{format_toned, render_table, report_title};
use crate::display::{Label, Labels};
use crate::error::FinboardResult;
use crate::models::{Money, Payable, Receivable};
use crate::storage::Snapshot;

/// Cash Flow Forecast report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    /// First day of the window
    pub window_start: NaiveDate,
    /// Last day of the window
    pub window_end: NaiveDate,
    pub payables_due: Money,
    pub receivables_due: Money,
    /// Rows left out because they failed validation
    pub skipped_rows: usize,
}

impl Forecast {
    /// Generate for the thirty days following `today`
    pub fn generate(
        payables: &Snapshot<Payable>,
        receivables: &Snapshot<Receivable>,
        today: NaiveDate,
    ) -> Self {
        Self::generate_window(payables, receivables, today, DEFAULT_FORECAST_DAYS)
    }

    /// Generate for the `days` following `today`
    pub fn generate_window(
        payables: &Snapshot<Payable>,
        receivables: &Snapshot<Receivable>,
        today: NaiveDate,
        days: u32,
    ) -> Self {
        // Past the calendar's end the window simply runs to the last date
        let window_end = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        let window = today..=window_end;
        let mut rejected = 0;

        // Rows outside the window are still validated
        let mut payables_due = Money::zero();
        for p in payables.iter() {
            if admit("payables", p.id, p.amount, &mut rejected) && window.contains(&p.due_date) {
                accumulate(&mut payables_due, "payables", p.id, p.amount, &mut rejected);
            }
        }

        let mut receivables_due = Money::zero();
        for r in receivables.iter() {
            if admit("receivables", r.id, r.amount, &mut rejected) && window.contains(&r.due_date) {
                accumulate(&mut receivables_due, "receivables", r.id, r.amount, &mut rejected);
            }
        }

        tracing::debug!(%today, %window_end, "forecast generated");

        Self {
            window_start: today,
            window_end,
            payables_due,
            receivables_due,
            skipped_rows: payables.skipped + receivables.skipped + rejected,
        }
    }

    /// Receivables minus payables over the window
    pub fn net(&self) -> Money {
        self.receivables_due - self.payables_due
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, labels: &Labels) -> String {
        let mut output = report_title(labels.text(Label::ForecastTitle));
        output.push_str(&format!(
            "{}: {} - {}\n\n",
            labels.text(Label::Window),
            self.window_start,
            self.window_end
        ));

        let net = self.net();
        let rows = vec![
            vec![
                labels.text(Label::PayablesDue).to_string(),
                labels.money(self.payables_due),
            ],
            vec![
                labels.text(Label::ReceivablesDue).to_string(),
                labels.money(self.receivables_due),
            ],
            vec![
                labels.text(Label::Net).to_string(),
                format_toned(&labels.money(net), !net.is_negative()),
            ],
        ];
        output.push_str(&render_table(&["", labels.text(Label::Total)], rows));
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
        csv.write_record(["window_start", "window_end", "payables_due", "receivables_due", "net"])?;
        csv.write_record([
            self.window_start.to_string(),
            self.window_end.to_string(),
            format!("{:.2}", self.payables_due.to_f64()),
            format!("{:.2}", self.receivables_due.to_f64()),
            format!("{:.2}", self.net().to_f64()),
        ])?;
        csv.flush()?;
        Ok(())
    }
}
