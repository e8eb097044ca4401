//! Top Clients by Revenue
//!
//! Ranks clients by the receivables they have already paid. Receivables are
//! joined to clients by id and then grouped by client *name*, so two clients
//! sharing a name are reported as one.

use std::collections::HashMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use super::{accumulate, admit, rank_totals, NamedTotal, DEFAULT_TOP_CLIENTS};
use crate::display::report::{format_bar, render_table, report_title, truncate, BAR_WIDTH};
use crate::display::{Label, Labels};
use crate::error::FinboardResult;
use crate::models::{Client, ClientId, Money, Receivable};
use crate::storage::Snapshot;

/// Top Clients by Revenue report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopClientsByRevenue {
    /// Top clients, largest total first
    pub clients: Vec<NamedTotal>,
    /// The N the ranking was cut at
    pub top_n: usize,
    /// Received receivables whose client does not exist
    pub orphaned_receivables: usize,
    /// Rows left out because they failed validation
    pub skipped_rows: usize,
}

impl TopClientsByRevenue {
    /// Generate with the default cut of five clients
    pub fn generate(receivables: &Snapshot<Receivable>, clients: &Snapshot<Client>) -> Self {
        Self::generate_top(receivables, clients, DEFAULT_TOP_CLIENTS)
    }

    /// Generate keeping the `top_n` largest clients
    pub fn generate_top(
        receivables: &Snapshot<Receivable>,
        clients: &Snapshot<Client>,
        top_n: usize,
    ) -> Self {
        let names: HashMap<ClientId, &str> = clients
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let mut totals: HashMap<String, Money> = HashMap::new();
        let mut orphaned = 0;
        let mut rejected = 0;

        for receivable in receivables.iter().filter(|r| r.status.is_settled()) {
            if !admit("receivables", receivable.id, receivable.amount, &mut rejected) {
                continue;
            }
            match names.get(&receivable.client_id) {
                Some(name) => {
                    let total = totals.entry((*name).to_string()).or_default();
                    accumulate(total, "receivables", receivable.id, receivable.amount, &mut rejected);
                }
                None => {
                    tracing::debug!(
                        receivable = %receivable.id,
                        client = %receivable.client_id,
                        "receivable has no matching client"
                    );
                    orphaned += 1;
                }
            }
        }

        let mut ranked = rank_totals(totals);
        ranked.truncate(top_n);

        Self {
            clients: ranked,
            top_n,
            orphaned_receivables: orphaned,
            skipped_rows: receivables.skipped + clients.skipped + rejected,
        }
    }

    /// Check if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, labels: &Labels) -> String {
        let mut output = report_title(&format!(
            "{} (Top {})",
            labels.text(Label::TopClientsTitle),
            self.top_n
        ));

        if self.is_empty() {
            output.push_str(labels.text(Label::NoData));
            output.push('\n');
        } else {
            let max = self.clients.first().map(|c| c.total.cents()).unwrap_or(0) as f64;
            let rows = self
                .clients
                .iter()
                .map(|c| {
                    vec![
                        truncate(&c.name, 32),
                        labels.money(c.total),
                        format_bar(c.total.cents() as f64, max, BAR_WIDTH),
                    ]
                })
                .collect();
            output.push_str(&render_table(
                &[labels.text(Label::Client), labels.text(Label::Total), ""],
                rows,
            ));
            output.push('\n');
        }

        if self.orphaned_receivables > 0 {
            output.push_str(&format!(
                "{}: {}\n",
                labels.text(Label::OrphanedReceivables),
                self.orphaned_receivables
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
        csv.write_record(["rank", "client", "total"])?;
        for (rank, c) in self.clients.iter().enumerate() {
            csv.write_record([
                (rank + 1).to_string(),
                c.name.clone(),
                format!("{:.2}", c.total.to_f64()),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}
