//! Database bootstrap
//!
//! Creates the four tables the SQLite backend reads. Existing tables and
//! their rows are left untouched.

use std::path::Path;

use rusqlite::Connection;

use crate::error::FinboardResult;

/// Create the schema on an open connection
pub fn create_schema(conn: &Connection) -> FinboardResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            email TEXT,
            phone TEXT
        );

        CREATE TABLE IF NOT EXISTS payables (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            supplier TEXT,
            amount REAL,
            due_date DATE,
            status TEXT
        );

        CREATE TABLE IF NOT EXISTS receivables (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id INTEGER,
            amount REAL,
            due_date DATE,
            status TEXT,
            FOREIGN KEY(client_id) REFERENCES clients(id)
        );

        CREATE TABLE IF NOT EXISTS ledger_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT,
            description TEXT,
            amount REAL,
            date DATE
        );

        CREATE INDEX IF NOT EXISTS idx_payables_due_date ON payables(due_date);
        CREATE INDEX IF NOT EXISTS idx_receivables_due_date ON receivables(due_date);
        CREATE INDEX IF NOT EXISTS idx_ledger_entries_date ON ledger_entries(date);",
    )?;
    Ok(())
}

/// Open (or create) a database file and make sure the schema exists
pub fn initialize_database(path: &Path) -> FinboardResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    create_schema(&conn)?;

    tracing::info!(path = %path.display(), "database initialized");
    Ok(())
}
