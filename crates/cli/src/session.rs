//! Interactive menu session
//!
//! Reads commands line by line, dispatches them to the [`Bank`], and prints
//! every business failure as a message before going back to the menu.
//! Generic over the reader and writer so tests can script a whole session.

use anyhow::Result;
use ledger_business::{AccountSelection, Bank, BusinessError};
use ledger_core::{NewCustomer, BIRTH_DATE_FORMAT};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

use crate::menu::{MenuChoice, MENU};

/// Input ran out before the operator quit.
#[derive(Debug, Error)]
#[error("end of input")]
struct EndOfInput;

pub struct Session<R, W> {
    bank: Bank,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(bank: Bank, input: R, output: W) -> Self {
        Self {
            bank,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (Bank, W) {
        (self.bank, self.output)
    }

    /// Run the menu loop until `q` or end of input. Only console I/O
    /// failures are returned as errors.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let line = match self.prompt(MENU) {
                Ok(line) => line,
                Err(err) if err.is::<EndOfInput>() => break,
                Err(err) => return Err(err),
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(
                    self.output,
                    "[ERROR] Invalid operation, please select the desired operation again."
                )?;
                continue;
            };

            debug!(command = choice.as_str(), "menu command");
            if choice == MenuChoice::Quit {
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(err) if err.is::<EndOfInput>() => break,
                Err(err) => match err.downcast::<BusinessError>() {
                    Ok(business) => writeln!(self.output, "\n[ERROR] {}", business)?,
                    Err(other) => return Err(other),
                },
            }
        }

        writeln!(self.output, "\nShutting down... See you soon!\n")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::Statement => self.statement(),
            MenuChoice::NewAccount => self.new_account(),
            MenuChoice::ListAccounts => self.list_accounts(),
            MenuChoice::NewCustomer => self.new_customer(),
            MenuChoice::Quit => Ok(()),
        }
    }

    // === Commands ===

    fn deposit(&mut self) -> Result<()> {
        let number = self.resolve_account()?;
        let amount = self.read_amount("Enter the deposit amount: ")?;
        self.bank.deposit(number, amount)?;
        writeln!(self.output, "\n=== Deposit completed successfully! ===")?;
        Ok(())
    }

    fn withdraw(&mut self) -> Result<()> {
        let number = self.resolve_account()?;
        let amount = self.read_amount("Enter the withdrawal amount: ")?;
        self.bank.withdraw(number, amount)?;
        writeln!(self.output, "\n=== Withdrawal completed successfully! ===")?;
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        let number = self.resolve_account()?;
        let statement = self.bank.statement(number)?;
        writeln!(self.output, "\n{}", statement)?;
        Ok(())
    }

    fn new_customer(&mut self) -> Result<()> {
        let tax_id = self.prompt("Enter the tax ID (numbers only): ")?;
        self.bank.ensure_tax_id_available(&tax_id)?;

        let name = self.prompt("Enter the full name: ")?;
        let birth_date = self.prompt("Enter the birth date (dd-mm-yyyy): ")?;
        let address =
            self.prompt("Enter the address (street, number - district - city/state): ")?;

        let customer = self.bank.register_customer(NewCustomer {
            tax_id,
            name,
            birth_date,
            address,
        })?;
        writeln!(self.output, "\n=== Customer registered successfully! ===")?;
        writeln!(self.output, "Name:\t\t{}", customer.name())?;
        writeln!(self.output, "Tax ID:\t\t{}", customer.tax_id())?;
        writeln!(
            self.output,
            "Birth date:\t{}",
            customer.birth_date().format(BIRTH_DATE_FORMAT)
        )?;
        writeln!(self.output, "Address:\t{}", customer.address())?;
        Ok(())
    }

    fn new_account(&mut self) -> Result<()> {
        let tax_id = self.prompt("Enter the customer's tax ID: ")?;
        let account = self.bank.open_account(&tax_id)?;
        let (number, branch) = (account.number(), account.branch().to_string());
        writeln!(
            self.output,
            "\n=== Account {} opened at branch {} successfully! ===",
            number, branch
        )?;
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<()> {
        let summaries = self.bank.account_summaries()?;
        for summary in summaries {
            writeln!(self.output, "{}", "=".repeat(100))?;
            writeln!(self.output, "{}", summary)?;
        }
        Ok(())
    }

    // === Helpers ===

    /// Ask for a tax ID and settle on one of that customer's accounts.
    fn resolve_account(&mut self) -> Result<u32> {
        let tax_id = self.prompt("Enter the customer's tax ID: ")?;
        match self.bank.account_selection(&tax_id)? {
            AccountSelection::Single(number) => Ok(number),
            AccountSelection::Choose(options) => {
                writeln!(self.output, "\nAvailable accounts:")?;
                for (index, option) in options.iter().enumerate() {
                    writeln!(
                        self.output,
                        "[{}] Branch: {} | Account: {}",
                        index, option.branch, option.number
                    )?;
                }
                let choice = self.prompt("Choose the account: ")?;
                Ok(self.bank.pick_account(&tax_id, &choice)?)
            }
        }
    }

    fn read_amount(&mut self, message: &str) -> Result<rust_decimal::Decimal> {
        let raw = self.prompt(message)?;
        let amount = self
            .bank
            .config()
            .currency
            .parse_amount(&raw)
            .map_err(BusinessError::from)?;
        Ok(amount)
    }

    /// Print `message` and read one line, without its line ending.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
