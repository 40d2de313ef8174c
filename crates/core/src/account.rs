//! # Account Module
//!
//! Checking accounts: a balance, an append-only transaction history, and the
//! withdrawal rules (per-withdrawal ceiling plus a lifetime withdrawal cap).

use crate::error::{CoreError, CoreResult};
use crate::transaction::{Transaction, TransactionKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Branch code every account is opened under unless configured otherwise.
pub const DEFAULT_BRANCH: &str = "0001";

/// Withdrawal rules of a checking account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalPolicy {
    /// Largest amount allowed in one withdrawal
    pub limit: Decimal,
    /// Number of withdrawals allowed over the account's lifetime
    pub max_withdrawals: u32,
}

impl WithdrawalPolicy {
    pub fn new(limit: Decimal, max_withdrawals: u32) -> Self {
        Self {
            limit,
            max_withdrawals,
        }
    }
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self::new(Decimal::new(500, 0), 3)
    }
}

/// A checking account.
///
/// The balance and history are private: the only way to move money is
/// [`Transaction::register`], which keeps both in step.
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    number: u32,
    branch: String,
    owner_tax_id: String,
    balance: Decimal,
    history: Vec<Transaction>,
    policy: WithdrawalPolicy,
    opened_at: DateTime<Utc>,
}

impl CheckingAccount {
    pub fn new(number: u32, branch: &str, owner_tax_id: &str, policy: WithdrawalPolicy) -> Self {
        Self {
            number,
            branch: branch.to_string(),
            owner_tax_id: owner_tax_id.to_string(),
            balance: Decimal::ZERO,
            history: Vec::new(),
            policy,
            opened_at: Utc::now(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn owner_tax_id(&self) -> &str {
        &self.owner_tax_id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn policy(&self) -> WithdrawalPolicy {
        self.policy
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Successful transactions, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Number of successful withdrawals so far.
    pub fn withdrawals_made(&self) -> u32 {
        let count = self
            .history
            .iter()
            .filter(|t| t.kind() == TransactionKind::Withdrawal)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Deposit `amount`, recording it in the history.
    pub fn deposit(&mut self, amount: Decimal) -> CoreResult<Decimal> {
        Transaction::deposit(amount).register(self)
    }

    /// Withdraw `amount`, recording it in the history.
    pub fn withdraw(&mut self, amount: Decimal) -> CoreResult<Decimal> {
        Transaction::withdrawal(amount).register(self)
    }

    pub(crate) fn credit(&mut self, amount: Decimal) -> CoreResult<()> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(format!(
                "Deposit amount must be positive: {}",
                amount
            )));
        }
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            CoreError::InvalidAmount(format!("Deposit of {} would overflow the balance", amount))
        })?;
        Ok(())
    }

    pub(crate) fn debit(&mut self, amount: Decimal) -> CoreResult<()> {
        self.check_withdrawal(amount)?;
        self.balance -= amount;
        Ok(())
    }

    /// Validate a withdrawal without applying it.
    pub fn check_withdrawal(&self, amount: Decimal) -> CoreResult<()> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(format!(
                "Withdrawal amount must be positive: {}",
                amount
            )));
        }
        if amount > self.policy.limit {
            return Err(CoreError::WithdrawalLimitExceeded {
                amount,
                limit: self.policy.limit,
            });
        }
        if self.withdrawals_made() >= self.policy.max_withdrawals {
            return Err(CoreError::WithdrawalCountExceeded {
                max: self.policy.max_withdrawals,
            });
        }
        if amount > self.balance {
            return Err(CoreError::InsufficientBalance {
                needed: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    pub(crate) fn record(&mut self, transaction: Transaction) {
        self.history.push(transaction);
    }
}

impl fmt::Display for CheckingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} / branch {} (owner: {}, balance: {})",
            self.number, self.branch, self.owner_tax_id, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account_with(limit: Decimal, max: u32) -> CheckingAccount {
        CheckingAccount::new(1, DEFAULT_BRANCH, "111", WithdrawalPolicy::new(limit, max))
    }

    #[test]
    fn test_account_creation() {
        let acc = CheckingAccount::new(7, DEFAULT_BRANCH, "111", WithdrawalPolicy::default());

        assert_eq!(acc.number(), 7);
        assert_eq!(acc.branch(), "0001");
        assert_eq!(acc.owner_tax_id(), "111");
        assert_eq!(acc.balance(), Decimal::ZERO);
        assert!(acc.history().is_empty());
        assert_eq!(acc.policy().limit, dec!(500));
        assert_eq!(acc.policy().max_withdrawals, 3);
    }

    #[test]
    fn test_deposit_increases_balance_exactly() {
        let mut acc = account_with(dec!(500), 3);
        assert_eq!(acc.deposit(dec!(100.25)).unwrap(), dec!(100.25));
        assert_eq!(acc.deposit(dec!(0.75)).unwrap(), dec!(101));
        assert_eq!(acc.history().len(), 2);
    }

    #[test]
    fn test_non_positive_deposit_rejected() {
        let mut acc = account_with(dec!(500), 3);
        acc.deposit(dec!(50)).unwrap();

        for amount in [dec!(0), dec!(-1)] {
            let err = acc.deposit(amount).unwrap_err();
            assert!(matches!(err, CoreError::InvalidAmount(_)));
        }
        assert_eq!(acc.balance(), dec!(50));
        assert_eq!(acc.history().len(), 1);
    }

    #[test]
    fn test_withdraw_within_rules() {
        let mut acc = account_with(dec!(500), 3);
        acc.deposit(dec!(800)).unwrap();

        assert_eq!(acc.withdraw(dec!(300)).unwrap(), dec!(500));
        assert_eq!(acc.withdrawals_made(), 1);
        assert_eq!(acc.history().last().unwrap().kind(), TransactionKind::Withdrawal);
    }

    #[test]
    fn test_withdraw_over_balance_rejected() {
        let mut acc = account_with(dec!(500), 3);
        acc.deposit(dec!(100)).unwrap();

        let err = acc.withdraw(dec!(100.01)).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientBalance {
                needed: dec!(100.01),
                available: dec!(100),
            }
        );
        assert_eq!(acc.balance(), dec!(100));
        assert_eq!(acc.history().len(), 1);
    }

    #[test]
    fn test_withdraw_over_ceiling_rejected() {
        let mut acc = account_with(dec!(500), 3);
        acc.deposit(dec!(2000)).unwrap();

        let err = acc.withdraw(dec!(500.01)).unwrap_err();
        assert!(matches!(err, CoreError::WithdrawalLimitExceeded { .. }));
        assert_eq!(acc.balance(), dec!(2000));
        assert_eq!(acc.withdrawals_made(), 0);
    }

    #[test]
    fn test_withdraw_non_positive_rejected() {
        let mut acc = account_with(dec!(500), 3);
        acc.deposit(dec!(100)).unwrap();

        assert!(matches!(
            acc.withdraw(dec!(0)),
            Err(CoreError::InvalidAmount(_))
        ));
        assert!(matches!(
            acc.withdraw(dec!(-5)),
            Err(CoreError::InvalidAmount(_))
        ));
        assert_eq!(acc.balance(), dec!(100));
    }

    #[test]
    fn test_withdrawal_cap_reached() {
        let mut acc = account_with(dec!(500), 3);
        acc.deposit(dec!(2000)).unwrap();

        for _ in 0..3 {
            acc.withdraw(dec!(500)).unwrap();
        }
        assert_eq!(acc.balance(), dec!(500));
        assert_eq!(acc.withdrawals_made(), 3);

        // Valid amount on every other rule, still refused.
        let err = acc.withdraw(dec!(1)).unwrap_err();
        assert_eq!(err, CoreError::WithdrawalCountExceeded { max: 3 });
        assert_eq!(acc.balance(), dec!(500));
        assert_eq!(acc.history().len(), 4);
    }

    #[test]
    fn test_failed_withdrawals_do_not_count_toward_cap() {
        let mut acc = account_with(dec!(500), 2);
        acc.deposit(dec!(100)).unwrap();

        assert!(acc.withdraw(dec!(200)).is_err());
        assert!(acc.withdraw(dec!(900)).is_err());
        assert_eq!(acc.withdrawals_made(), 0);

        acc.withdraw(dec!(40)).unwrap();
        acc.withdraw(dec!(60)).unwrap();
        assert_eq!(acc.balance(), dec!(0));
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut acc = account_with(dec!(500), 3);
        acc.deposit(Decimal::MAX).unwrap();

        let err = acc.deposit(Decimal::MAX).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount(_)));
        assert_eq!(acc.balance(), Decimal::MAX);
        assert_eq!(acc.history().len(), 1);

        assert!(acc.deposit(dec!(1)).is_err());
        assert_eq!(acc.balance(), Decimal::MAX);
    }

    #[test]
    fn test_deposits_allowed_after_cap() {
        let mut acc = account_with(dec!(500), 1);
        acc.deposit(dec!(100)).unwrap();
        acc.withdraw(dec!(10)).unwrap();

        assert_eq!(acc.deposit(dec!(5)).unwrap(), dec!(95));
    }
}
