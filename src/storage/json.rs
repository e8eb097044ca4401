//! JSON dataset repository
//!
//! Reads a single `dataset.json` document holding all four collections in
//! their raw row shape. Each call re-reads the file.

use std::path::{Path, PathBuf};

use super::file_io::{read_json, write_json_atomic};
use super::raw::RawDataset;
use super::{DatasetSnapshot, Repository, Snapshot};
use crate::error::FinboardResult;
use crate::models::{Client, LedgerEntry, Payable, Receivable};

/// Repository over a JSON dataset file
#[derive(Debug, Clone)]
pub struct JsonRepository {
    path: PathBuf,
}

impl JsonRepository {
    /// Create a repository for the given file (a missing file reads as empty)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dataset file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the dataset file atomically
    pub fn save(&self, dataset: &RawDataset) -> FinboardResult<()> {
        write_json_atomic(&self.path, dataset)
    }

    fn load(&self) -> FinboardResult<DatasetSnapshot> {
        let dataset: RawDataset = read_json(&self.path)?;
        Ok(dataset.into_snapshot())
    }
}

impl Repository for JsonRepository {
    fn list_clients(&self) -> FinboardResult<Snapshot<Client>> {
        Ok(self.load()?.clients)
    }

    fn list_payables(&self) -> FinboardResult<Snapshot<Payable>> {
        Ok(self.load()?.payables)
    }

    fn list_receivables(&self) -> FinboardResult<Snapshot<Receivable>> {
        Ok(self.load()?.receivables)
    }

    fn list_ledger_entries(&self) -> FinboardResult<Snapshot<LedgerEntry>> {
        Ok(self.load()?.ledger_entries)
    }

    fn snapshot(&self) -> FinboardResult<DatasetSnapshot> {
        self.load()
    }
}
