//! Campaign planning errors.
//!
//! Only raised by strict pre-submission checks; the projection path never
//! returns these.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that block a draft from being submitted to the execution service.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum PlanError {
    /// Selected account id is missing from the current account snapshot
    #[error("Account not found in snapshot: {id}")]
    UnknownAccount {
        /// Identifier that failed to resolve
        id: String,
    },

    /// No account is selected for sending
    #[error("No accounts selected")]
    NoAccounts,

    /// The draft carries no recipients
    #[error("No recipients assigned")]
    NoRecipients,

    /// Draft field validation error
    #[error("Validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },
}

impl PlanError {
    /// Check if the operator can fix this by refreshing the account list.
    pub const fn is_stale_snapshot(&self) -> bool {
        matches!(self, Self::UnknownAccount { .. })
    }
}
