//! Account identity types
//!
//! This module defines the identifier and kind labels shared by every
//! account variant.

use std::fmt;

/// Account identifier
///
/// Opaque and immutable once the account is created. Uniqueness across
/// accounts is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Create an account number from any string-like value
    pub fn new(number: impl Into<String>) -> Self {
        AccountNumber(number.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(number: &str) -> Self {
        AccountNumber::new(number)
    }
}

impl From<String> for AccountNumber {
    fn from(number: String) -> Self {
        AccountNumber(number)
    }
}

/// The variant an account belongs to
///
/// Used to label renderings and receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Plain account with no overdraft and no interest
    Standard,

    /// Interest-bearing account
    Savings,

    /// Account permitting a bounded negative balance
    Checking,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountKind::Standard => "Account",
            AccountKind::Savings => "Savings Account",
            AccountKind::Checking => "Checking Account",
        };
        f.write_str(label)
    }
}
