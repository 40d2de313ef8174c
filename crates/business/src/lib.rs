//! # Ledger Business
//!
//! Business logic layer - the in-memory `Bank` and what it returns.

pub mod bank;
pub mod error;
pub mod services;
pub mod statement;

pub use bank::Bank;
pub use error::{BusinessError, BusinessResult};
pub use services::{
    AccountSelection, AccountSummary, BankConfig, TransactionReceipt, TIMESTAMP_FORMAT,
};
pub use statement::{Statement, StatementEntry};
