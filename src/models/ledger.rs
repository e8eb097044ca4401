//! Ledger entry model
//!
//! A dated revenue or expense transaction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Money;

/// Kind of a ledger entry
///
/// Matching is case-insensitive. Only `Revenue` counts as a positive
/// bucket; every other kind, including unknown ones, renders as negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    Revenue,
    Expense,
    /// Unrecognized kind text, kept as first written
    Unknown(String),
}

impl EntryKind {
    /// Parse a stored kind value (accepts "Receita"/"Despesa")
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "revenue" | "receita" => Self::Revenue,
            "expense" | "despesa" => Self::Expense,
            _ => Self::Unknown(raw.trim().to_string()),
        }
    }

    /// Check if this is the positive (revenue) bucket
    pub fn is_revenue(&self) -> bool {
        matches!(self, Self::Revenue)
    }

    /// Key used to merge kinds that differ only by case
    pub fn group_key(&self) -> String {
        match self {
            Self::Revenue => "revenue".to_string(),
            Self::Expense => "expense".to_string(),
            Self::Unknown(raw) => raw.to_lowercase(),
        }
    }

    /// Position in the canonical bucket order
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Self::Revenue => 0,
            Self::Expense => 1,
            Self::Unknown(_) => 2,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revenue => write!(f, "Revenue"),
            Self::Expense => write!(f, "Expense"),
            Self::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<String> for EntryKind {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        kind.to_string()
    }
}

/// A ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier
    pub id: EntryId,

    /// Revenue or expense
    pub kind: EntryKind,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Amount (always non-negative; the kind carries the direction)
    pub amount: Money,

    /// Booking date
    pub date: NaiveDate,
}

impl LedgerEntry {
    /// Create a new ledger entry
    pub fn new(id: impl Into<EntryId>, kind: EntryKind, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            kind,
            description: String::new(),
            amount,
            date,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
