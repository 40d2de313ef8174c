//! # Transaction Module
//!
//! Deposits and withdrawals. A transaction validates itself against an
//! account, moves the balance, and is appended to the account history only
//! when it succeeds.

use crate::account::CheckingAccount;
use crate::error::CoreResult;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Kind of a ledger movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }

    /// Label used on statements.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single deposit or withdrawal. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    created_at: DateTime<Utc>,
}

impl Transaction {
    fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            created_at: Utc::now(),
        }
    }

    pub fn deposit(amount: Decimal) -> Self {
        Self::new(TransactionKind::Deposit, amount)
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Self::new(TransactionKind::Withdrawal, amount)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Apply this transaction to `account`.
    ///
    /// On success the balance has moved, the transaction sits at the end of
    /// the account history, and the new balance is returned. On failure the
    /// account is untouched.
    pub fn register(self, account: &mut CheckingAccount) -> CoreResult<Decimal> {
        match self.kind {
            TransactionKind::Deposit => account.credit(self.amount)?,
            TransactionKind::Withdrawal => account.debit(self.amount)?,
        }
        account.record(self);
        Ok(account.balance())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::WithdrawalPolicy;
    use crate::error::CoreError;
    use rust_decimal_macros::dec;

    fn account() -> CheckingAccount {
        CheckingAccount::new(1, "0001", "12345678900", WithdrawalPolicy::default())
    }

    #[test]
    fn test_register_deposit_appends_history() {
        let mut acc = account();
        let balance = Transaction::deposit(dec!(150)).register(&mut acc).unwrap();

        assert_eq!(balance, dec!(150));
        assert_eq!(acc.history().len(), 1);
        assert_eq!(acc.history()[0].kind(), TransactionKind::Deposit);
        assert_eq!(acc.history()[0].amount(), dec!(150));
    }

    #[test]
    fn test_failed_register_leaves_no_trace() {
        let mut acc = account();
        let err = Transaction::withdrawal(dec!(10))
            .register(&mut acc)
            .unwrap_err();

        assert!(err.is_insufficient_balance());
        assert_eq!(acc.balance(), dec!(0));
        assert!(acc.history().is_empty());

        let err = Transaction::deposit(dec!(0)).register(&mut acc).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount(_)));
        assert!(acc.history().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Transaction::deposit(dec!(10.5)).to_string(), "Deposit: 10.5");
        assert_eq!(TransactionKind::Withdrawal.as_str(), "withdrawal");
    }
}
