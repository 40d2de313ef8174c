//! Service configuration and result types
//!
//! What the bank is configured with, and what its operations hand back.

use chrono::{DateTime, Utc};
use ledger_core::{Currency, TransactionKind, WithdrawalPolicy, DEFAULT_BRANCH};
use rust_decimal::Decimal;
use std::fmt;

/// How timestamps are shown in listings and statements.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Settings shared by every account the bank opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    /// Branch code stamped on new accounts
    pub branch: String,
    /// Withdrawal rules for new checking accounts
    pub policy: WithdrawalPolicy,
    /// Currency used to render amounts
    pub currency: Currency,
}

impl BankConfig {
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    pub fn with_policy(mut self, policy: WithdrawalPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            policy: WithdrawalPolicy::default(),
            currency: Currency::default(),
        }
    }
}

/// Outcome of a successful deposit or withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub account_number: u32,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub balance: Decimal,
}

impl TransactionReceipt {
    pub fn new(account_number: u32, kind: TransactionKind, amount: Decimal, balance: Decimal) -> Self {
        Self {
            account_number,
            kind,
            amount,
            balance,
        }
    }
}

/// One line of the account listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub branch: String,
    pub number: u32,
    pub holder: String,
    pub opened_at: DateTime<Utc>,
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.branch)?;
        writeln!(f, "Account:\t{}", self.number)?;
        writeln!(f, "Holder:\t\t{}", self.holder)?;
        write!(f, "Opened:\t\t{}", self.opened_at.format(TIMESTAMP_FORMAT))
    }
}

/// How an operation should pick among a customer's accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSelection {
    /// Exactly one account: use it without asking
    Single(u32),
    /// Several accounts, in opening order: the operator picks an index
    Choose(Vec<AccountSummary>),
}
