//! # Money Module
//!
//! Currency definition plus amount parsing and rendering.
//! Amounts are `rust_decimal::Decimal` throughout so that balances stay exact.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// The single currency a ledger operates in.
///
/// # Examples
/// ```
/// use ledger_core::Currency;
/// use rust_decimal::Decimal;
///
/// let brl = Currency::brl();
/// assert_eq!(brl.format(Decimal::new(1050, 1)), "R$ 105.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    /// ISO 4217 code
    pub code: String,
    /// Full name
    pub name: String,
    /// Number of decimal places (BRL=2, USD=2)
    pub decimals: u8,
    /// Display symbol
    pub symbol: String,
}

impl Currency {
    pub fn new(code: &str, name: &str, decimals: u8, symbol: &str) -> Self {
        Self {
            code: code.to_uppercase(),
            name: name.to_string(),
            decimals,
            symbol: symbol.to_string(),
        }
    }

    // === Preset currencies ===

    /// Brazilian Real (2 decimals)
    pub fn brl() -> Self {
        Self::new("BRL", "Brazilian Real", 2, "R$")
    }

    /// US Dollar (2 decimals)
    pub fn usd() -> Self {
        Self::new("USD", "US Dollar", 2, "$")
    }

    /// Render an amount with the symbol and a fixed number of decimals.
    pub fn format(&self, amount: Decimal) -> String {
        let places = u32::from(self.decimals);
        format!(
            "{} {:.*}",
            self.symbol,
            usize::from(self.decimals),
            amount.round_dp(places)
        )
    }

    /// Parse operator input into an amount.
    ///
    /// Accepts `.` or `,` as the decimal separator. Rejects blank input,
    /// non-numeric text and more significant fractional digits than the
    /// currency allows; trailing zeros do not count (`10.000` is fine).
    /// The sign is not checked here; deposit and withdrawal rules do that.
    pub fn parse_amount(&self, input: &str) -> CoreResult<Decimal> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidAmount("no amount given".to_string()));
        }

        let normalized = trimmed.replace(',', ".");
        let amount = Decimal::from_str(&normalized)
            .map_err(|_| CoreError::InvalidAmount(format!("'{}' is not a number", trimmed)))?
            .normalize();

        if amount.scale() > u32::from(self.decimals) {
            return Err(CoreError::InvalidAmount(format!(
                "{} allows at most {} decimal places",
                self.code, self.decimals
            )));
        }

        Ok(amount)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::brl()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
