//! Core data models for finboard
//!
//! This module contains the entities the reporting engine reads: clients,
//! payables, receivables and ledger entries, plus the `Money` amount type.

pub mod client;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod payable;
pub mod receivable;

pub use client::Client;
pub use ids::{ClientId, EntryId, PayableId, ReceivableId};
pub use ledger::{EntryKind, LedgerEntry};
pub use money::Money;
pub use payable::{Payable, PayableStatus};
pub use receivable::{Receivable, ReceivableStatus};
