//! In-memory repository
//!
//! Holds already-validated entities. Used by tests and by callers that
//! assemble data themselves.

use super::{Repository, Snapshot};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Client, LedgerEntry, Payable, Receivable};

/// Repository backed by plain vectors
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    clients: Vec<Client>,
    payables: Vec<Payable>,
    receivables: Vec<Receivable>,
    ledger_entries: Vec<LedgerEntry>,
    unavailable: Option<String>,
}

impl InMemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every read fails with `StorageUnavailable`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn with_clients(mut self, clients: Vec<Client>) -> Self {
        self.clients = clients;
        self
    }

    pub fn with_payables(mut self, payables: Vec<Payable>) -> Self {
        self.payables = payables;
        self
    }

    pub fn with_receivables(mut self, receivables: Vec<Receivable>) -> Self {
        self.receivables = receivables;
        self
    }

    pub fn with_ledger_entries(mut self, entries: Vec<LedgerEntry>) -> Self {
        self.ledger_entries = entries;
        self
    }

    fn read<T: Clone>(&self, rows: &[T]) -> FinboardResult<Snapshot<T>> {
        match &self.unavailable {
            Some(reason) => Err(FinboardError::StorageUnavailable(reason.clone())),
            None => Ok(Snapshot::from(rows.to_vec())),
        }
    }
}

impl Repository for InMemoryRepository {
    fn list_clients(&self) -> FinboardResult<Snapshot<Client>> {
        self.read(&self.clients)
    }

    fn list_payables(&self) -> FinboardResult<Snapshot<Payable>> {
        self.read(&self.payables)
    }

    fn list_receivables(&self) -> FinboardResult<Snapshot<Receivable>> {
        self.read(&self.receivables)
    }

    fn list_ledger_entries(&self) -> FinboardResult<Snapshot<LedgerEntry>> {
        self.read(&self.ledger_entries)
    }
}
