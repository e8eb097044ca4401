//! Payable model
//!
//! Money owed by the organization to a supplier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PayableId;
use super::money::Money;

/// Status of a payable
///
/// Parsed case-insensitively. Values written by the Portuguese seeder
/// ("Pendente", "Pago") are accepted as aliases. Anything else is kept
/// verbatim as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PayableStatus {
    /// Not paid yet
    Pending,
    /// Settled
    Paid,
    /// Unrecognized status text
    Unknown(String),
}

impl PayableStatus {
    /// Parse a stored status value
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Self::Pending,
            "paid" | "pago" => Self::Paid,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Check if this payable has been settled
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl fmt::Display for PayableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
            Self::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<String> for PayableStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<PayableStatus> for String {
    fn from(status: PayableStatus) -> Self {
        status.to_string()
    }
}

/// A bill owed to a supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payable {
    /// Unique identifier
    pub id: PayableId,

    /// Supplier name (free text, used as the grouping key)
    pub supplier: String,

    /// Amount owed
    pub amount: Money,

    /// Due date
    pub due_date: NaiveDate,

    /// Settlement status
    pub status: PayableStatus,
}

impl Payable {
    /// Create a new payable
    pub fn new(
        id: impl Into<PayableId>,
        supplier: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
        status: PayableStatus,
    ) -> Self {
        Self {
            id: id.into(),
            supplier: supplier.into(),
            amount,
            due_date,
            status,
        }
    }
}
