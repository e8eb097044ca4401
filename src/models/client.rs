//! Client model
//!
//! Clients are looked up by receivables; the reporting engine never creates
//! or deletes them.

use serde::{Deserialize, Serialize};

use super::ids::ClientId;
use crate::error::{FinboardError, FinboardResult};

/// A client of the organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: ClientId,

    /// Display name (non-empty)
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,
}

impl Client {
    /// Create a client with empty contact details
    pub fn new(id: impl Into<ClientId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
        }
    }

    /// Set the contact details
    pub fn with_contact(mut self, email: impl Into<String>, phone: impl Into<String>) -> Self {
        self.email = email.into();
        self.phone = phone.into();
        self
    }

    /// Validate the client
    pub fn validate(&self) -> FinboardResult<()> {
        if self.name.trim().is_empty() {
            return Err(FinboardError::invalid_row(
                "clients",
                self.id.get(),
                "name is empty",
            ));
        }
        Ok(())
    }
}
