//! Business layer errors
//!
//! Every failure the operator can trigger from the menu. None is fatal.

use ledger_core::CoreError;
use thiserror::Error;

/// Business operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessError {
    // === Not found errors ===
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Account not found: {0}")]
    AccountNotFound(u32),

    #[error("Customer {0} has no accounts")]
    NoAccounts(String),

    #[error("No accounts registered")]
    NoAccountsRegistered,

    // === Registration errors ===
    #[error("A customer with tax ID {0} already exists")]
    DuplicateCustomer(String),

    // === Selection errors ===
    #[error("Invalid account index '{input}': pick a number from 0 to {max}")]
    InvalidIndex { input: String, max: usize },

    // === Wrapped errors ===
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;

impl BusinessError {
    /// Build an invalid index error for a list of `len` accounts.
    pub fn invalid_index(input: &str, len: usize) -> Self {
        Self::InvalidIndex {
            input: input.trim().to_string(),
            max: len.saturating_sub(1),
        }
    }
}
