//! Account statements
//!
//! Every recorded transaction in order, then the current balance.

use crate::services::TIMESTAMP_FORMAT;
use chrono::{DateTime, Utc};
use ledger_core::{CheckingAccount, Currency, TransactionKind};
use rust_decimal::Decimal;
use std::fmt;

/// Shown instead of entries when the history is empty.
pub const EMPTY_HISTORY: &str = "No transactions recorded.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementEntry {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub recorded_at: DateTime<Utc>,
}

/// Snapshot of an account's history and balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub branch: String,
    pub account_number: u32,
    pub holder: String,
    pub entries: Vec<StatementEntry>,
    pub balance: Decimal,
    currency: Currency,
}

impl Statement {
    pub fn for_account(account: &CheckingAccount, holder: &str, currency: &Currency) -> Self {
        let entries = account
            .history()
            .iter()
            .map(|t| StatementEntry {
                kind: t.kind(),
                amount: t.amount(),
                recorded_at: t.created_at(),
            })
            .collect();

        Self {
            branch: account.branch().to_string(),
            account_number: account.number(),
            holder: holder.to_string(),
            entries,
            balance: account.balance(),
            currency: currency.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================ STATEMENT ================")?;
        writeln!(
            f,
            "Branch {} / Account {} / {}",
            self.branch, self.account_number, self.holder
        )?;
        writeln!(f)?;
        if self.entries.is_empty() {
            writeln!(f, "{}", EMPTY_HISTORY)?;
        }
        for entry in &self.entries {
            writeln!(
                f,
                "{} {}: {}",
                entry.recorded_at.format(TIMESTAMP_FORMAT),
                entry.kind.label(),
                self.currency.format(entry.amount)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Balance:\t{}", self.currency.format(self.balance))?;
        write!(f, "===========================================")
    }
}
