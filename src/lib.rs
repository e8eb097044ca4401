//! finboard - financial dashboard reports
//!
//! Turns clients, payables, receivables and ledger entries into six derived
//! reports: cash flow, supplier concentration, settlement status, top clients,
//! current-month comparison and a forward forecast.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Entities, money and ids
//! - `storage`: The `Repository` trait and its SQLite, JSON and in-memory backends
//! - `reports`: The aggregation engine
//! - `display`: Terminal rendering and locale labels
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finboard::reports::{DashboardReport, ReportOptions};
//! use finboard::storage::SqliteRepository;
//!
//! let repo = SqliteRepository::open(Path::new("finboard.db"))?;
//! let today = chrono::Local::now().date_naive();
//! let dashboard = DashboardReport::generate(&repo, today, &ReportOptions::default())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FinboardError, FinboardResult};
pub use storage::Repository;
