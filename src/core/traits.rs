//! Core trait for the account hierarchy
//!
//! This module defines the contract every account variant implements, so the
//! base account, savings accounts and checking accounts can be driven through
//! one interface (including as `dyn BankAccount`).

use crate::types::{AccountError, AccountKind, AccountNumber, Receipt};
use rust_decimal::Decimal;
use std::fmt;

/// Common account contract
///
/// Balance mutations return a [`Receipt`] on success and an [`AccountError`]
/// on rejection. A rejected operation leaves the account unchanged. The
/// `Display` impl is the human-readable rendering of the account.
pub trait BankAccount: fmt::Display {
    /// Variant of this account
    fn kind(&self) -> AccountKind;

    /// Account identifier
    fn number(&self) -> &AccountNumber;

    /// Display name of the account holder
    fn holder(&self) -> &str;

    /// Current balance (no side effects)
    fn balance(&self) -> Decimal;

    /// Credit `amount` to the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - The new balance would overflow
    fn deposit(&mut self, amount: Decimal) -> Result<Receipt, AccountError>;

    /// Debit `amount` from the account
    ///
    /// How far the balance may fall is decided by the variant.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - The variant's funds rule rejects the withdrawal
    /// - The new balance would overflow
    fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, AccountError>;

    /// Human-readable rendering of the account state
    fn describe(&self) -> String {
        self.to_string()
    }
}
