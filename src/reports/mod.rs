//! Reports module for finboard
//!
//! The aggregation engine. Every report is a pure function of repository
//! snapshots: nothing here performs I/O or holds state between calls, so
//! reports may be computed in any order or on separate threads.

pub mod cash_flow;
pub mod dashboard;
pub mod forecast;
pub mod monthly;
pub mod settlement;
pub mod suppliers;
pub mod top_clients;

pub use cash_flow::{CashFlowSummary, KindTotal};
pub use dashboard::DashboardReport;
pub use forecast::Forecast;
pub use monthly::CurrentMonthComparison;
pub use settlement::{SettlementBuckets, SettlementStatusBreakdown};
pub use suppliers::SupplierConcentration;
pub use top_clients::TopClientsByRevenue;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Default number of suppliers kept by the concentration report
pub const DEFAULT_TOP_SUPPLIERS: usize = 4;

/// Default number of clients kept by the revenue ranking
pub const DEFAULT_TOP_CLIENTS: usize = 5;

/// Default forecast horizon in days
pub const DEFAULT_FORECAST_DAYS: u32 = 30;

/// Tunables shared by the reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub top_suppliers: usize,
    pub top_clients: usize,
    pub forecast_days: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_suppliers: DEFAULT_TOP_SUPPLIERS,
            top_clients: DEFAULT_TOP_CLIENTS,
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }
}

/// A named total in a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTotal {
    pub name: String,
    pub total: Money,
}

/// Admit a row into an aggregation, or count it as rejected
///
/// Snapshot loaders already drop negative amounts, but in-memory callers can
/// hand the engine anything.
pub(crate) fn admit(table: &'static str, id: impl fmt::Display, amount: Money, rejected: &mut usize) -> bool {
    if amount.is_negative() {
        tracing::warn!(table, id = %id, amount = %amount, "skipping row with negative amount");
        *rejected += 1;
        false
    } else {
        true
    }
}

/// Add a row's amount into a running total, or count it as rejected on overflow
pub(crate) fn accumulate(
    total: &mut Money,
    table: &'static str,
    id: impl fmt::Display,
    amount: Money,
    rejected: &mut usize,
) -> bool {
    match total.checked_add(amount) {
        Some(sum) => {
            *total = sum;
            true
        }
        None => {
            tracing::warn!(table, id = %id, amount = %amount, "skipping row that overflows the running total");
            *rejected += 1;
            false
        }
    }
}

/// Sort totals descending, ties by name ascending
pub(crate) fn rank_totals(totals: HashMap<String, Money>) -> Vec<NamedTotal> {
    let mut ranked: Vec<NamedTotal> = totals
        .into_iter()
        .map(|(name, total)| NamedTotal { name, total })
        .collect();
    ranked.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    ranked
}
