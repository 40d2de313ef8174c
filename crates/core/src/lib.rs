//! # Ledger Core
//!
//! Core domain types for Ledger Desk.
//!
//! - [`Currency`]: amount parsing and rendering
//! - [`Transaction`]: deposit / withdrawal, applied via [`Transaction::register`]
//! - [`CheckingAccount`]: balance, history, withdrawal rules
//! - [`Customer`]: tax ID, personal data, owned account numbers

pub mod account;
pub mod customer;
pub mod error;
pub mod money;
pub mod transaction;

pub use account::{CheckingAccount, WithdrawalPolicy, DEFAULT_BRANCH};
pub use customer::{normalize_tax_id, Customer, NewCustomer, BIRTH_DATE_FORMAT};
pub use error::{CoreError, CoreResult};
pub use money::Currency;
pub use transaction::{Transaction, TransactionKind};
