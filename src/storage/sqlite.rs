//! SQLite repository
//!
//! The only place that knows table and column names. Columns are read as
//! dynamically-typed values so that one malformed cell rejects its row
//! instead of failing the whole query.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags};

use super::raw::{validate_rows, RawClient, RawDataset, RawLedgerEntry, RawPayable, RawReceivable};
use super::{DatasetSnapshot, Repository, Snapshot};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Client, LedgerEntry, Payable, Receivable};

/// Read-only repository over a SQLite database
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open an existing database file read-only
    pub fn open(path: &Path) -> FinboardResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            FinboardError::StorageUnavailable(format!("Failed to open {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), "opened sqlite repository");
        Ok(Self { conn })
    }

    /// Wrap an already-open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

fn text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Text(s) => Some(s),
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Blob(bytes) => String::from_utf8(bytes).ok(),
    }
}

fn real(value: Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Real(f) => Some(f),
        Value::Integer(i) => Some(i as f64),
        // Unparsable text becomes NaN so validation reports it as invalid, not missing
        Value::Text(s) => Some(s.trim().parse().unwrap_or(f64::NAN)),
        Value::Blob(_) => Some(f64::NAN),
    }
}

fn integer(value: Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(i),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn load_clients(conn: &Connection) -> FinboardResult<Vec<RawClient>> {
    let mut stmt = conn.prepare("SELECT id, name, email, phone FROM clients")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(RawClient {
                id: row.get(0)?,
                name: text(row.get(1)?),
                email: text(row.get(2)?),
                phone: text(row.get(3)?),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn load_payables(conn: &Connection) -> FinboardResult<Vec<RawPayable>> {
    let mut stmt = conn.prepare("SELECT id, supplier, amount, due_date, status FROM payables")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(RawPayable {
                id: row.get(0)?,
                supplier: text(row.get(1)?),
                amount: real(row.get(2)?),
                due_date: text(row.get(3)?),
                status: text(row.get(4)?),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn load_receivables(conn: &Connection) -> FinboardResult<Vec<RawReceivable>> {
    let mut stmt =
        conn.prepare("SELECT id, client_id, amount, due_date, status FROM receivables")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(RawReceivable {
                id: row.get(0)?,
                client_id: integer(row.get(1)?),
                amount: real(row.get(2)?),
                due_date: text(row.get(3)?),
                status: text(row.get(4)?),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn load_ledger_entries(conn: &Connection) -> FinboardResult<Vec<RawLedgerEntry>> {
    let mut stmt =
        conn.prepare("SELECT id, kind, description, amount, date FROM ledger_entries")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(RawLedgerEntry {
                id: row.get(0)?,
                kind: text(row.get(1)?),
                description: text(row.get(2)?),
                amount: real(row.get(3)?),
                date: text(row.get(4)?),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

impl Repository for SqliteRepository {
    fn list_clients(&self) -> FinboardResult<Snapshot<Client>> {
        let rows = load_clients(&self.conn)?;
        Ok(validate_rows("clients", rows, RawClient::validate))
    }

    fn list_payables(&self) -> FinboardResult<Snapshot<Payable>> {
        let rows = load_payables(&self.conn)?;
        Ok(validate_rows("payables", rows, RawPayable::validate))
    }

    fn list_receivables(&self) -> FinboardResult<Snapshot<Receivable>> {
        let rows = load_receivables(&self.conn)?;
        Ok(validate_rows("receivables", rows, RawReceivable::validate))
    }

    fn list_ledger_entries(&self) -> FinboardResult<Snapshot<LedgerEntry>> {
        let rows = load_ledger_entries(&self.conn)?;
        Ok(validate_rows("ledger_entries", rows, RawLedgerEntry::validate))
    }

    /// Read all four tables inside one read transaction
    fn snapshot(&self) -> FinboardResult<DatasetSnapshot> {
        let tx = self.conn.unchecked_transaction()?;
        let dataset = RawDataset {
            clients: load_clients(&tx)?,
            payables: load_payables(&tx)?,
            receivables: load_receivables(&tx)?,
            ledger_entries: load_ledger_entries(&tx)?,
        };
        tx.commit()?;
        Ok(dataset.into_snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money, PayableStatus, ReceivableStatus};
    use crate::storage::init::initialize_database;
    use rusqlite::params;
    use tempfile::TempDir;

    fn create_test_db() -> (TempDir, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finboard.db");
        initialize_database(&path).unwrap();

        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO clients (id, name, email, phone) VALUES (?1, ?2, ?3, ?4)",
            params![1, "Ana Souza", "ana@example.com", "(11) 91234-5678"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO clients (id, name) VALUES (?1, ?2)",
            params![2, ""],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO payables (supplier, amount, due_date, status) VALUES (?1, ?2, ?3, ?4)",
            params!["Acme Ltda", 1500.25, "2024-03-20", "Pendente"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO payables (supplier, amount, due_date, status) VALUES (?1, ?2, ?3, ?4)",
            params!["Acme Ltda", -10.0, "2024-03-20", "Pago"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO payables (supplier, amount, due_date, status) VALUES (?1, ?2, ?3, ?4)",
            params!["Beta SA", "lots", "2024-03-20", "Pago"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO receivables (client_id, amount, due_date, status) VALUES (?1, ?2, ?3, ?4)",
            params![1, 800, "2024-04-01", "Recebido"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO ledger_entries (kind, description, amount, date) VALUES (?1, ?2, ?3, ?4)",
            params!["Receita", "Consulting", 100.0, "2024-03-05"],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO ledger_entries (kind, description, amount, date) VALUES (?1, ?2, ?3, ?4)",
            params!["Expense", "Rent", 40.0, "05/03/2024"],
        )
        .unwrap();

        (temp_dir, path)
    }

    #[test]
    fn test_open_missing_database_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let result = SqliteRepository::open(&temp_dir.path().join("missing.db"));
        assert!(result.err().unwrap().is_storage_unavailable());
    }

    #[test]
    fn test_list_clients_skips_blank_names() {
        let (_temp_dir, path) = create_test_db();
        let repo = SqliteRepository::open(&path).unwrap();

        let clients = repo.list_clients().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients.skipped, 1);
        assert_eq!(clients.rows[0].name, "Ana Souza");
    }

    #[test]
    fn test_list_payables_skips_invalid_rows() {
        let (_temp_dir, path) = create_test_db();
        let repo = SqliteRepository::open(&path).unwrap();

        let payables = repo.list_payables().unwrap();
        assert_eq!(payables.len(), 1);
        assert_eq!(payables.skipped, 2);
        assert_eq!(payables.rows[0].amount, Money::from_cents(150025));
        assert_eq!(payables.rows[0].status, PayableStatus::Pending);
    }

    #[test]
    fn test_integer_amount_column_is_accepted() {
        let (_temp_dir, path) = create_test_db();
        let repo = SqliteRepository::open(&path).unwrap();

        let receivables = repo.list_receivables().unwrap();
        assert_eq!(receivables.len(), 1);
        assert_eq!(receivables.rows[0].amount, Money::from_units(800));
        assert_eq!(receivables.rows[0].status, ReceivableStatus::Received);
    }

    #[test]
    fn test_snapshot_reads_everything() {
        let (_temp_dir, path) = create_test_db();
        let repo = SqliteRepository::open(&path).unwrap();

        let snapshot = repo.snapshot().unwrap();
        assert_eq!(snapshot.clients.len(), 1);
        assert_eq!(snapshot.payables.len(), 1);
        assert_eq!(snapshot.receivables.len(), 1);
        assert_eq!(snapshot.ledger_entries.len(), 1);
        assert_eq!(snapshot.ledger_entries.skipped, 1);
        assert_eq!(snapshot.ledger_entries.rows[0].kind, EntryKind::Revenue);
    }

    #[test]
    fn test_missing_table_is_storage_unavailable() {
        let conn = Connection::open_in_memory().unwrap();
        let repo = SqliteRepository::from_connection(conn);
        assert!(repo.list_payables().unwrap_err().is_storage_unavailable());
    }
}
