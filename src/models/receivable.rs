//! Receivable model
//!
//! Money owed to the organization by a client. `client_id` is a weak
//! reference: a receivable whose client no longer exists is tolerated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ClientId, ReceivableId};
use super::money::Money;

/// Status of a receivable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReceivableStatus {
    /// Not received yet
    Pending,
    /// Settled
    Received,
    /// Unrecognized status text
    Unknown(String),
}

impl ReceivableStatus {
    /// Parse a stored status value (case-insensitive, accepts "Pendente"/"Recebido")
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Self::Pending,
            "received" | "recebido" => Self::Received,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Check if this receivable has been settled
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Received)
    }
}

impl fmt::Display for ReceivableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Received => write!(f, "Received"),
            Self::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<String> for ReceivableStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ReceivableStatus> for String {
    fn from(status: ReceivableStatus) -> Self {
        status.to_string()
    }
}

/// An invoice owed by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receivable {
    /// Unique identifier
    pub id: ReceivableId,

    /// The client who owes the amount
    pub client_id: ClientId,

    /// Amount owed
    pub amount: Money,

    /// Due date
    pub due_date: NaiveDate,

    /// Settlement status
    pub status: ReceivableStatus,
}

impl Receivable {
    /// Create a new receivable
    pub fn new(
        id: impl Into<ReceivableId>,
        client_id: impl Into<ClientId>,
        amount: Money,
        due_date: NaiveDate,
        status: ReceivableStatus,
    ) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            amount,
            due_date,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(ReceivableStatus::parse("received"), ReceivableStatus::Received);
        assert_eq!(ReceivableStatus::parse("Recebido"), ReceivableStatus::Received);
        assert_eq!(ReceivableStatus::parse(" pending "), ReceivableStatus::Pending);
        assert!(ReceivableStatus::parse("Received").is_settled());
        assert!(!ReceivableStatus::parse("Disputed").is_settled());
    }
}
