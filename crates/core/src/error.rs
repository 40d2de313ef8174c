//! # Error Module
//!
//! Domain errors for Ledger Desk, built with thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Business rule violations only; nothing here touches I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // === Amount errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    // === Checking account limits ===
    #[error("Withdrawal of {amount} exceeds the per-withdrawal limit of {limit}")]
    WithdrawalLimitExceeded { amount: Decimal, limit: Decimal },

    #[error("Maximum number of withdrawals reached ({max})")]
    WithdrawalCountExceeded { max: u32 },

    // === Validation errors ===
    #[error("Invalid birth date '{0}', expected dd-mm-yyyy")]
    InvalidBirthDate(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, CoreError::InsufficientBalance { .. })
    }
}
