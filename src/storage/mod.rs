//! Storage layer for finboard
//!
//! The reporting engine only ever sees entity snapshots handed out by a
//! [`Repository`]. Table and column names live in the SQLite backend; the
//! JSON and in-memory backends exist for portable datasets and tests.

pub mod file_io;
pub mod init;
pub mod json;
pub mod memory;
pub mod raw;
pub mod sqlite;

pub use file_io::{read_json, write_json_atomic};
pub use init::{create_schema, initialize_database};
pub use json::JsonRepository;
pub use memory::InMemoryRepository;
pub use raw::{RawClient, RawDataset, RawLedgerEntry, RawPayable, RawReceivable};
pub use sqlite::SqliteRepository;

use serde::{Deserialize, Serialize};

use crate::error::FinboardResult;
use crate::models::{Client, LedgerEntry, Payable, Receivable};

/// A point-in-time read of one collection
///
/// Rows that failed validation while loading are not part of `rows`; they
/// are only counted in `skipped`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

impl<T> Snapshot<T> {
    /// Create a snapshot from loaded rows and a skipped-row count
    pub fn new(rows: Vec<T>, skipped: usize) -> Self {
        Self { rows, skipped }
    }

    /// Number of valid rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no valid rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the valid rows
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}

impl<T> From<Vec<T>> for Snapshot<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::new(rows, 0)
    }
}

/// All four collections read together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSnapshot {
    pub clients: Snapshot<Client>,
    pub payables: Snapshot<Payable>,
    pub receivables: Snapshot<Receivable>,
    pub ledger_entries: Snapshot<LedgerEntry>,
}

impl DatasetSnapshot {
    /// Invalid rows across all four collections
    pub fn skipped_rows(&self) -> usize {
        self.clients.skipped
            + self.payables.skipped
            + self.receivables.skipped
            + self.ledger_entries.skipped
    }
}

/// Read-only access to the four entity collections
///
/// Every call is a fresh snapshot. Two calls may observe different states
/// of the store; use [`Repository::snapshot`] when reports must agree.
pub trait Repository {
    fn list_clients(&self) -> FinboardResult<Snapshot<Client>>;

    fn list_payables(&self) -> FinboardResult<Snapshot<Payable>>;

    fn list_receivables(&self) -> FinboardResult<Snapshot<Receivable>>;

    fn list_ledger_entries(&self) -> FinboardResult<Snapshot<LedgerEntry>>;

    /// Read all four collections
    ///
    /// Backends that can read inside one isolation scope override this.
    fn snapshot(&self) -> FinboardResult<DatasetSnapshot> {
        Ok(DatasetSnapshot {
            clients: self.list_clients()?,
            payables: self.list_payables()?,
            receivables: self.list_receivables()?,
            ledger_entries: self.list_ledger_entries()?,
        })
    }
}

impl<R: Repository + ?Sized> Repository for &R {
    fn list_clients(&self) -> FinboardResult<Snapshot<Client>> {
        (**self).list_clients()
    }

    fn list_payables(&self) -> FinboardResult<Snapshot<Payable>> {
        (**self).list_payables()
    }

    fn list_receivables(&self) -> FinboardResult<Snapshot<Receivable>> {
        (**self).list_receivables()
    }

    fn list_ledger_entries(&self) -> FinboardResult<Snapshot<LedgerEntry>> {
        (**self).list_ledger_entries()
    }

    fn snapshot(&self) -> FinboardResult<DatasetSnapshot> {
        (**self).snapshot()
    }
}
