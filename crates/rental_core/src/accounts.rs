//! Registered customers and the payment hook the dispatcher charges through.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{RentalError, Result};
use crate::request::validate_account;

/// A registered customer. Every field is an opaque, non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub surname: String,
    pub address: String,
    pub credit_card: String,
    pub driving_license: String,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        address: impl Into<String>,
        credit_card: impl Into<String>,
        driving_license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            address: address.into(),
            credit_card: credit_card.into(),
            driving_license: driving_license.into(),
        }
    }
}

/// Partial self-service or admin edit. The name is the key and cannot change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountUpdate {
    pub surname: Option<String>,
    pub address: Option<String>,
    pub credit_card: Option<String>,
    pub driving_license: Option<String>,
}

/// Proof that an account was charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeReceipt {
    pub account: String,
    pub amount: u32,
}

/// Where money actually moves. Implementations must not touch rental state.
pub trait PaymentGateway: Send + fmt::Debug {
    /// Charge `amount` to `account`. An `Err` aborts the booking before any vehicle
    /// state changes.
    fn charge(&mut self, account: &Account, amount: u32) -> Result<ChargeReceipt>;
}

/// Gateway that accepts every charge.
#[derive(Debug, Default)]
pub struct StubGateway;

impl PaymentGateway for StubGateway {
    fn charge(&mut self, account: &Account, amount: u32) -> Result<ChargeReceipt> {
        info!(account = %account.name, amount, "payment processed");
        Ok(ChargeReceipt {
            account: account.name.clone(),
            amount,
        })
    }
}

/// Accounts keyed by name, plus the gateway used to charge them.
#[derive(Debug)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
    gateway: Box<dyn PaymentGateway>,
    charges: Vec<ChargeReceipt>,
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self::new(Box::new(StubGateway))
    }
}

impl AccountDirectory {
    pub fn new(gateway: Box<dyn PaymentGateway>) -> Self {
        Self {
            accounts: Vec::new(),
            gateway,
            charges: Vec::new(),
        }
    }

    pub fn set_gateway(&mut self, gateway: Box<dyn PaymentGateway>) {
        self.gateway = gateway;
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    /// Successful charges in the order they were made.
    pub fn charges(&self) -> &[ChargeReceipt] {
        &self.charges
    }

    pub fn register(&mut self, account: Account) -> Result<()> {
        validate_account(&account)?;
        if self.find_by_name(&account.name).is_some() {
            return Err(RentalError::DuplicateAccount(account.name));
        }
        info!(account = %account.name, "account registered");
        self.accounts.push(account);
        Ok(())
    }

    pub fn update(&mut self, name: &str, update: AccountUpdate) -> Result<&Account> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| RentalError::AccountNotFound(name.to_string()))?;

        let mut candidate = self.accounts[index].clone();
        if let Some(surname) = update.surname {
            candidate.surname = surname;
        }
        if let Some(address) = update.address {
            candidate.address = address;
        }
        if let Some(credit_card) = update.credit_card {
            candidate.credit_card = credit_card;
        }
        if let Some(driving_license) = update.driving_license {
            candidate.driving_license = driving_license;
        }
        validate_account(&candidate)?;

        info!(account = name, "account updated");
        self.accounts[index] = candidate;
        Ok(&self.accounts[index])
    }

    pub fn remove(&mut self, name: &str) -> Result<Account> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| RentalError::AccountNotFound(name.to_string()))?;
        info!(account = name, "account removed");
        Ok(self.accounts.remove(index))
    }

    /// Charge the named account through the configured gateway.
    pub fn charge(&mut self, name: &str, amount: u32) -> Result<ChargeReceipt> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| RentalError::AccountNotFound(name.to_string()))?;
        let receipt = self.gateway.charge(account, amount)?;
        self.charges.push(receipt.clone());
        Ok(receipt)
    }
}
