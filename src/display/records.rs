//! Record listings for terminal output
//!
//! One table per stored collection, as read from the repository.

use std::collections::HashMap;

use super::labels::{Label, Labels};
use super::report::{render_table, report_title, truncate};
use crate::models::{Client, ClientId, LedgerEntry, Payable, Receivable};
use crate::storage::Snapshot;

/// Format the client list
pub fn format_client_list(clients: &Snapshot<Client>, labels: &Labels) -> String {
    let rows = clients
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                truncate(&c.name, 32),
                c.email.clone(),
                c.phone.clone(),
            ]
        })
        .collect();

    listing(
        labels,
        Label::Clients,
        &[Label::Id, Label::Name, Label::Email, Label::Phone],
        rows,
        clients.skipped,
    )
}

/// Format the payable list
pub fn format_payable_list(payables: &Snapshot<Payable>, labels: &Labels) -> String {
    let rows = payables
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                truncate(&p.supplier, 32),
                labels.money(p.amount),
                p.due_date.to_string(),
                p.status.to_string(),
            ]
        })
        .collect();

    listing(
        labels,
        Label::Payables,
        &[Label::Id, Label::Supplier, Label::Amount, Label::DueDate, Label::Status],
        rows,
        payables.skipped,
    )
}

/// Format the receivable list, naming each client when it exists
pub fn format_receivable_list(
    receivables: &Snapshot<Receivable>,
    clients: &Snapshot<Client>,
    labels: &Labels,
) -> String {
    let names: HashMap<ClientId, &str> = clients
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let rows = receivables
        .iter()
        .map(|r| {
            let client = match names.get(&r.client_id) {
                Some(name) => truncate(name, 32),
                None => r.client_id.to_string(),
            };
            vec![
                r.id.to_string(),
                client,
                labels.money(r.amount),
                r.due_date.to_string(),
                r.status.to_string(),
            ]
        })
        .collect();

    listing(
        labels,
        Label::Receivables,
        &[Label::Id, Label::Client, Label::Amount, Label::DueDate, Label::Status],
        rows,
        receivables.skipped,
    )
}

/// Format the ledger entry list
pub fn format_ledger_list(entries: &Snapshot<LedgerEntry>, labels: &Labels) -> String {
    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.to_string(),
                e.kind.to_string(),
                truncate(&e.description, 40),
                labels.money(e.amount),
            ]
        })
        .collect();

    listing(
        labels,
        Label::Ledger,
        &[Label::Id, Label::Date, Label::Kind, Label::Description, Label::Amount],
        rows,
        entries.skipped,
    )
}

fn listing(
    labels: &Labels,
    title: Label,
    headers: &[Label],
    rows: Vec<Vec<String>>,
    skipped: usize,
) -> String {
    let mut output = report_title(labels.text(title));

    if rows.is_empty() {
        output.push_str(labels.text(Label::NoData));
        output.push('\n');
    } else {
        let headers: Vec<&str> = headers.iter().map(|h| labels.text(*h)).collect();
        output.push_str(&render_table(&headers, rows));
        output.push('\n');
    }

    if skipped > 0 {
        output.push_str(&format!("{}: {}\n", labels.text(Label::SkippedRows), skipped));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Locale;
    use crate::models::{EntryKind, Money, PayableStatus, ReceivableStatus};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_client_list() {
        let clients: Snapshot<_> =
            vec![Client::new(1, "Ana").with_contact("ana@example.com", "555-0100")].into();

        let output = format_client_list(&clients, &Labels::default());
        assert!(output.contains("Clients"));
        assert!(output.contains("cli-1"));
        assert!(output.contains("ana@example.com"));
        assert!(output.contains("555-0100"));
    }

    #[test]
    fn test_payable_list_shows_skipped_rows() {
        let payables = Snapshot::new(
            vec![Payable::new(7, "Acme", Money::from_cents(1050), day(20), PayableStatus::Paid)],
            2,
        );

        let output = format_payable_list(&payables, &Labels::default());
        assert!(output.contains("pay-7"));
        assert!(output.contains("Acme"));
        assert!(output.contains("R$ 10.50"));
        assert!(output.contains("2024-03-20"));
        assert!(output.contains("Skipped rows: 2"));
    }

    #[test]
    fn test_receivable_list_names_clients() {
        let clients: Snapshot<_> = vec![Client::new(1, "Ana")].into();
        let receivables: Snapshot<_> = vec![
            Receivable::new(1, 1, Money::from_units(5), day(1), ReceivableStatus::Pending),
            Receivable::new(2, 9, Money::from_units(6), day(2), ReceivableStatus::Received),
        ]
        .into();

        let output = format_receivable_list(&receivables, &clients, &Labels::default());
        assert!(output.contains("Ana"));
        assert!(output.contains("cli-9"));
    }

    #[test]
    fn test_ledger_list_in_portuguese() {
        let entries: Snapshot<_> = vec![LedgerEntry::new(
            1,
            EntryKind::Revenue,
            Money::from_units(100),
            day(2),
        )]
        .into();

        let labels = Labels::new(Locale::PtBr, "R$");
        let output = format_ledger_list(&entries, &labels);
        assert!(output.contains("Lançamentos"));
        assert!(output.contains("Descrição"));
        assert!(output.contains("R$ 100.00"));
    }

    #[test]
    fn test_empty_list_shows_no_data() {
        let output = format_client_list(&Snapshot::default(), &Labels::default());
        assert!(output.contains("No data available."));
        assert!(!output.contains("Skipped rows"));
    }
}
