//! Ledger Desk CLI - interactive in-memory banking menu
//!
//! Usage:
//! ```bash
//! ledger
//! ledger --branch 0042 --withdrawal-limit 1000 --max-withdrawals 5
//! ledger --currency usd --verbose
//! ```

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use ledger_business::{Bank, BankConfig};
use ledger_core::{Currency, WithdrawalPolicy, DEFAULT_BRANCH};
use rust_decimal::Decimal;
use std::io;
use tracing::info;

mod logging;
mod menu;
mod session;

use session::Session;

/// Ledger Desk - register customers, open checking accounts, move money
#[derive(Debug, Parser)]
#[command(name = "ledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Branch code stamped on new accounts
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Largest amount allowed in a single withdrawal
    #[arg(long, default_value = "500")]
    pub withdrawal_limit: Decimal,

    /// Withdrawals allowed over an account's lifetime
    #[arg(long, default_value_t = 3)]
    pub max_withdrawals: u32,

    /// Currency used to read and show amounts
    #[arg(long, default_value = "brl")]
    pub currency: CurrencyArg,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CurrencyArg {
    Brl,
    Usd,
}

impl CurrencyArg {
    pub fn to_currency(self) -> Currency {
        match self {
            CurrencyArg::Brl => Currency::brl(),
            CurrencyArg::Usd => Currency::usd(),
        }
    }
}

impl Cli {
    /// Validate the flags and turn them into a bank configuration.
    pub fn bank_config(&self) -> Result<BankConfig> {
        let branch = self.branch.trim();
        if branch.is_empty() {
            bail!("--branch must not be empty");
        }
        if self.withdrawal_limit <= Decimal::ZERO {
            bail!(
                "--withdrawal-limit must be positive, got {}",
                self.withdrawal_limit
            );
        }

        Ok(BankConfig::default()
            .with_branch(branch)
            .with_policy(WithdrawalPolicy::new(
                self.withdrawal_limit,
                self.max_withdrawals,
            ))
            .with_currency(self.currency.to_currency()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let config = cli.bank_config()?;
    info!(
        branch = %config.branch,
        limit = %config.policy.limit,
        max_withdrawals = config.policy.max_withdrawals,
        currency = %config.currency,
        "starting ledger session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Bank::new(config), stdin.lock(), stdout.lock());
    session.run()?;

    let (bank, _) = session.into_parts();
    info!(
        customers = bank.customers().len(),
        accounts = bank.accounts().len(),
        "ledger session closed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ledger"]).unwrap();
        let config = cli.bank_config().unwrap();

        assert_eq!(config.branch, "0001");
        assert_eq!(config.policy.limit, dec!(500));
        assert_eq!(config.policy.max_withdrawals, 3);
        assert_eq!(config.currency, Currency::brl());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_custom_flags() {
        let cli = Cli::try_parse_from([
            "ledger",
            "--branch",
            "0042",
            "--withdrawal-limit",
            "1000.50",
            "--max-withdrawals",
            "5",
            "--currency",
            "usd",
            "-v",
        ])
        .unwrap();
        let config = cli.bank_config().unwrap();

        assert_eq!(config.branch, "0042");
        assert_eq!(config.policy.limit, dec!(1000.50));
        assert_eq!(config.policy.max_withdrawals, 5);
        assert_eq!(config.currency.code, "USD");
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_flags() {
        let cli = Cli::try_parse_from(["ledger", "--withdrawal-limit", "0"]).unwrap();
        assert!(cli.bank_config().is_err());

        let cli = Cli::try_parse_from(["ledger", "--branch", " "]).unwrap();
        assert!(cli.bank_config().is_err());

        assert!(Cli::try_parse_from(["ledger", "--currency", "eur"]).is_err());
        assert!(Cli::try_parse_from(["ledger", "--max-withdrawals", "-1"]).is_err());
    }
}
