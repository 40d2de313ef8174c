//! # Customer Module
//!
//! Individual customers identified by tax ID. A customer keeps the numbers
//! of the accounts it owns; the accounts themselves live in the bank's
//! account registry.

use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use std::fmt;

/// Birth date format operators type in (`31-12-1990`).
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Registration data for a new customer, as typed by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    pub tax_id: String,
    pub name: String,
    pub birth_date: String,
    pub address: String,
}

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    tax_id: String,
    name: String,
    birth_date: NaiveDate,
    address: String,
    accounts: Vec<u32>,
}

impl Customer {
    /// Validate registration data and build a customer without accounts.
    pub fn register(data: NewCustomer) -> CoreResult<Self> {
        let tax_id = normalize_tax_id(&data.tax_id)?;

        let name = data.name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError("name must not be empty".to_string()));
        }

        let birth_date = parse_birth_date(&data.birth_date)?;

        Ok(Self {
            tax_id,
            name: name.to_string(),
            birth_date,
            address: data.address.trim().to_string(),
            accounts: Vec::new(),
        })
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Account numbers in the order they were opened.
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    pub fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.tax_id)
    }
}

/// Trim a tax ID and reject blank ones. Lookups go through this too so that
/// stray whitespace never splits one customer into two.
pub fn normalize_tax_id(raw: &str) -> CoreResult<String> {
    let tax_id = raw.trim();
    if tax_id.is_empty() {
        return Err(CoreError::ValidationError("tax ID must not be empty".to_string()));
    }
    Ok(tax_id.to_string())
}

fn parse_birth_date(raw: &str) -> CoreResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT)
        .map_err(|_| CoreError::InvalidBirthDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> NewCustomer {
        NewCustomer {
            tax_id: " 12345678900 ".to_string(),
            name: "Alice Souza".to_string(),
            birth_date: "15-04-1990".to_string(),
            address: "Rua A, 10 - Centro - Recife/PE".to_string(),
        }
    }

    #[test]
    fn test_register_customer() {
        let customer = Customer::register(alice()).unwrap();

        assert_eq!(customer.tax_id(), "12345678900");
        assert_eq!(customer.name(), "Alice Souza");
        assert_eq!(
            customer.birth_date(),
            NaiveDate::from_ymd_opt(1990, 4, 15).unwrap()
        );
        assert!(!customer.has_accounts());
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        let err = Customer::register(NewCustomer {
            tax_id: "   ".to_string(),
            ..alice()
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));

        let err = Customer::register(NewCustomer {
            name: String::new(),
            ..alice()
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn test_register_rejects_bad_birth_date() {
        for date in ["1990-04-15", "31-02-1990", ""] {
            let err = Customer::register(NewCustomer {
                birth_date: date.to_string(),
                ..alice()
            })
            .unwrap_err();
            assert!(matches!(err, CoreError::InvalidBirthDate(_)));
        }
    }

    #[test]
    fn test_accounts_keep_insertion_order() {
        let mut customer = Customer::register(alice()).unwrap();
        customer.add_account(3);
        customer.add_account(1);

        assert_eq!(customer.accounts(), &[3, 1]);
        assert_eq!(format!("{}", customer), "Alice Souza (12345678900)");
    }
}
