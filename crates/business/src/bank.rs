//! Bank service - customer registry, account registry and operations
//!
//! The `Bank` owns every customer and every account for the lifetime of the
//! process. Customers refer to their accounts by number.

use crate::error::{BusinessError, BusinessResult};
use crate::services::{AccountSelection, AccountSummary, BankConfig, TransactionReceipt};
use crate::statement::Statement;
use ledger_core::{normalize_tax_id, CheckingAccount, Customer, NewCustomer, Transaction};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// In-memory bank: registration, account opening, deposits, withdrawals,
/// statements and listings.
#[derive(Debug, Default)]
pub struct Bank {
    config: BankConfig,
    customers: Vec<Customer>,
    accounts: Vec<CheckingAccount>,
}

impl Bank {
    pub fn new(config: BankConfig) -> Self {
        Self {
            config,
            customers: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Customers in registration order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Accounts in opening order.
    pub fn accounts(&self) -> &[CheckingAccount] {
        &self.accounts
    }

    // === Customers ===

    /// First customer with this tax ID, scanning in registration order.
    pub fn find_customer(&self, tax_id: &str) -> Option<&Customer> {
        let tax_id = tax_id.trim();
        self.customers.iter().find(|c| c.tax_id() == tax_id)
    }

    /// Like [`Bank::find_customer`], but a missing customer is an error.
    pub fn customer(&self, tax_id: &str) -> BusinessResult<&Customer> {
        self.find_customer(tax_id)
            .ok_or_else(|| BusinessError::CustomerNotFound(tax_id.trim().to_string()))
    }

    /// Fail early when a tax ID is blank or already registered.
    pub fn ensure_tax_id_available(&self, tax_id: &str) -> BusinessResult<()> {
        let tax_id = normalize_tax_id(tax_id)?;
        if self.find_customer(&tax_id).is_some() {
            return Err(BusinessError::DuplicateCustomer(tax_id));
        }
        Ok(())
    }

    /// Register a new customer. Duplicated tax IDs are rejected and leave the
    /// registry unchanged.
    pub fn register_customer(&mut self, data: NewCustomer) -> BusinessResult<&Customer> {
        self.ensure_tax_id_available(&data.tax_id)?;
        let customer = Customer::register(data)?;

        info!(tax_id = customer.tax_id(), "customer registered");
        let index = self.customers.len();
        self.customers.push(customer);
        Ok(&self.customers[index])
    }

    // === Accounts ===

    /// Number the next account will get: one past the count of all accounts.
    pub fn next_account_number(&self) -> u32 {
        self.accounts.len() as u32 + 1
    }

    /// Open a checking account for an existing customer.
    pub fn open_account(&mut self, tax_id: &str) -> BusinessResult<&CheckingAccount> {
        let number = self.next_account_number();
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.tax_id() == tax_id.trim())
            .ok_or_else(|| BusinessError::CustomerNotFound(tax_id.trim().to_string()))?;

        let account = CheckingAccount::new(
            number,
            &self.config.branch,
            customer.tax_id(),
            self.config.policy,
        );
        customer.add_account(number);

        info!(
            account = number,
            branch = %self.config.branch,
            tax_id = customer.tax_id(),
            "account opened"
        );
        let index = self.accounts.len();
        self.accounts.push(account);
        Ok(&self.accounts[index])
    }

    pub fn account(&self, number: u32) -> BusinessResult<&CheckingAccount> {
        self.accounts
            .iter()
            .find(|a| a.number() == number)
            .ok_or(BusinessError::AccountNotFound(number))
    }

    /// Decide how to pick the account a customer operation applies to.
    pub fn account_selection(&self, tax_id: &str) -> BusinessResult<AccountSelection> {
        let customer = self.customer(tax_id)?;
        match customer.accounts() {
            [] => Err(BusinessError::NoAccounts(customer.tax_id().to_string())),
            [only] => Ok(AccountSelection::Single(*only)),
            many => many
                .iter()
                .map(|number| self.summary(*number))
                .collect::<BusinessResult<Vec<_>>>()
                .map(AccountSelection::Choose),
        }
    }

    /// Resolve an operator-typed index into one of the customer's accounts.
    /// Only plain decimal digits are accepted.
    pub fn pick_account(&self, tax_id: &str, input: &str) -> BusinessResult<u32> {
        let accounts = self.customer(tax_id)?.accounts();
        let digits = input.trim();
        Some(digits)
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|d| d.parse::<usize>().ok())
            .and_then(|index| accounts.get(index))
            .copied()
            .ok_or_else(|| BusinessError::invalid_index(input, accounts.len()))
    }

    /// Every account with its holder, in opening order.
    pub fn account_summaries(&self) -> BusinessResult<Vec<AccountSummary>> {
        if self.accounts.is_empty() {
            return Err(BusinessError::NoAccountsRegistered);
        }
        self.accounts
            .iter()
            .map(|a| self.summary(a.number()))
            .collect()
    }

    fn summary(&self, number: u32) -> BusinessResult<AccountSummary> {
        let account = self.account(number)?;
        Ok(AccountSummary {
            branch: account.branch().to_string(),
            number: account.number(),
            holder: self.holder_name(account).to_string(),
            opened_at: account.opened_at(),
        })
    }

    fn holder_name<'a>(&'a self, account: &'a CheckingAccount) -> &'a str {
        self.find_customer(account.owner_tax_id())
            .map(Customer::name)
            .unwrap_or_else(|| account.owner_tax_id())
    }

    // === Transactions ===

    pub fn deposit(&mut self, number: u32, amount: Decimal) -> BusinessResult<TransactionReceipt> {
        self.apply(number, Transaction::deposit(amount))
    }

    pub fn withdraw(&mut self, number: u32, amount: Decimal) -> BusinessResult<TransactionReceipt> {
        self.apply(number, Transaction::withdrawal(amount))
    }

    fn apply(&mut self, number: u32, transaction: Transaction) -> BusinessResult<TransactionReceipt> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or(BusinessError::AccountNotFound(number))?;

        let kind = transaction.kind();
        let amount = transaction.amount();
        debug!(account = number, kind = kind.as_str(), %amount, "applying transaction");

        match transaction.register(account) {
            Ok(balance) => {
                info!(account = number, kind = kind.as_str(), %amount, %balance, "transaction applied");
                Ok(TransactionReceipt::new(number, kind, amount, balance))
            }
            Err(err) => {
                info!(account = number, kind = kind.as_str(), %amount, error = %err, "transaction rejected");
                Err(err.into())
            }
        }
    }

    // === Statements ===

    pub fn statement(&self, number: u32) -> BusinessResult<Statement> {
        let account = self.account(number)?;
        Ok(Statement::for_account(
            account,
            self.holder_name(account),
            &self.config.currency,
        ))
    }
}
