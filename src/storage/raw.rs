//! Raw row shapes as persisted, and their validation into entities
//!
//! Both the SQLite and the JSON backends load rows into these loosely-typed
//! structs first. A row that cannot become an entity (unparsable date,
//! negative or missing amount, blank client name) is logged and counted,
//! never fatal for the whole collection.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Snapshot;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{
    Client, EntryKind, LedgerEntry, Money, Payable, PayableStatus, Receivable, ReceivableStatus,
};

/// Storage date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A `clients` row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawClient {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A `payables` row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPayable {
    pub id: i64,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A `receivables` row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReceivable {
    pub id: i64,
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A `ledger_entries` row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLedgerEntry {
    pub id: i64,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A whole dataset document, as stored by the JSON backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub clients: Vec<RawClient>,
    #[serde(default)]
    pub payables: Vec<RawPayable>,
    #[serde(default)]
    pub receivables: Vec<RawReceivable>,
    #[serde(default)]
    pub ledger_entries: Vec<RawLedgerEntry>,
}

/// Parse a stored date, accepting a trailing time-of-day component
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

fn required_date(table: &'static str, id: i64, raw: Option<&str>) -> FinboardResult<NaiveDate> {
    let raw = raw.ok_or_else(|| FinboardError::invalid_row(table, id, "missing date"))?;
    parse_date(raw)
        .ok_or_else(|| FinboardError::invalid_row(table, id, format!("unparsable date '{}'", raw)))
}

fn required_amount(table: &'static str, id: i64, raw: Option<f64>) -> FinboardResult<Money> {
    let raw = raw.ok_or_else(|| FinboardError::invalid_row(table, id, "missing amount"))?;
    let amount = Money::from_f64(raw)
        .ok_or_else(|| FinboardError::invalid_row(table, id, format!("invalid amount {}", raw)))?;
    if amount.is_negative() {
        return Err(FinboardError::invalid_row(
            table,
            id,
            format!("negative amount {}", amount),
        ));
    }
    Ok(amount)
}

impl RawClient {
    /// Validate into a [`Client`]
    pub fn validate(self) -> FinboardResult<Client> {
        let client = Client::new(self.id, self.name.unwrap_or_default().trim())
            .with_contact(self.email.unwrap_or_default(), self.phone.unwrap_or_default());
        client.validate()?;
        Ok(client)
    }
}

impl RawPayable {
    /// Validate into a [`Payable`]
    pub fn validate(self) -> FinboardResult<Payable> {
        let amount = required_amount("payables", self.id, self.amount)?;
        let due_date = required_date("payables", self.id, self.due_date.as_deref())?;
        Ok(Payable::new(
            self.id,
            self.supplier.unwrap_or_default(),
            amount,
            due_date,
            PayableStatus::parse(self.status.as_deref().unwrap_or_default()),
        ))
    }
}

impl RawReceivable {
    /// Validate into a [`Receivable`]
    pub fn validate(self) -> FinboardResult<Receivable> {
        let client_id = self
            .client_id
            .ok_or_else(|| FinboardError::invalid_row("receivables", self.id, "missing client_id"))?;
        let amount = required_amount("receivables", self.id, self.amount)?;
        let due_date = required_date("receivables", self.id, self.due_date.as_deref())?;
        Ok(Receivable::new(
            self.id,
            client_id,
            amount,
            due_date,
            ReceivableStatus::parse(self.status.as_deref().unwrap_or_default()),
        ))
    }
}

impl RawLedgerEntry {
    /// Validate into a [`LedgerEntry`]
    pub fn validate(self) -> FinboardResult<LedgerEntry> {
        let amount = required_amount("ledger_entries", self.id, self.amount)?;
        let date = required_date("ledger_entries", self.id, self.date.as_deref())?;
        Ok(LedgerEntry::new(
            self.id,
            EntryKind::parse(self.kind.as_deref().unwrap_or_default()),
            amount,
            date,
        )
        .with_description(self.description.unwrap_or_default()))
    }
}

/// Validate a batch of rows, skipping and counting the invalid ones
pub(crate) fn validate_rows<R, T, F>(table: &'static str, rows: Vec<R>, validate: F) -> Snapshot<T>
where
    F: Fn(R) -> FinboardResult<T>,
{
    let mut valid = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for row in rows {
        match validate(row) {
            Ok(entity) => valid.push(entity),
            Err(err) => {
                tracing::warn!(table, error = %err, "skipping invalid row");
                skipped += 1;
            }
        }
    }

    tracing::debug!(table, rows = valid.len(), skipped, "loaded snapshot");
    Snapshot::new(valid, skipped)
}

impl RawDataset {
    /// Validate every collection
    pub fn into_snapshot(self) -> super::DatasetSnapshot {
        super::DatasetSnapshot {
            clients: validate_rows("clients", self.clients, RawClient::validate),
            payables: validate_rows("payables", self.payables, RawPayable::validate),
            receivables: validate_rows("receivables", self.receivables, RawReceivable::validate),
            ledger_entries: validate_rows(
                "ledger_entries",
                self.ledger_entries,
                RawLedgerEntry::validate,
            ),
        }
    }
}
