//! Menu text and command parsing.

use std::fmt;

/// Main menu, printed before every command prompt.
pub const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew customer
[q]\tQuit
=> ";

/// A command typed at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewCustomer,
    Quit,
}

impl MenuChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuChoice::Deposit => "d",
            MenuChoice::Withdraw => "s",
            MenuChoice::Statement => "e",
            MenuChoice::NewAccount => "nc",
            MenuChoice::ListAccounts => "lc",
            MenuChoice::NewCustomer => "nu",
            MenuChoice::Quit => "q",
        }
    }

    /// Parse a command, ignoring surrounding whitespace and case.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "d" => Some(MenuChoice::Deposit),
            "s" => Some(MenuChoice::Withdraw),
            "e" => Some(MenuChoice::Statement),
            "nc" => Some(MenuChoice::NewAccount),
            "lc" => Some(MenuChoice::ListAccounts),
            "nu" => Some(MenuChoice::NewCustomer),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
