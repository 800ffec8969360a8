//! Checking account with an overdraft facility

use crate::core::account::Account;
use crate::core::traits::BankAccount;
use crate::types::money::{round_for_display, CURRENCY_PLACES};
use crate::types::{AccountError, AccountKind, AccountNumber, Receipt};
use rust_decimal::Decimal;
use std::fmt;

/// Checking account whose balance may go negative down to `-overdraft_limit`
///
/// After every successful withdrawal, `balance >= -overdraft_limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckingAccount {
    account: Account,
    overdraft_limit: Decimal,
}

impl CheckingAccount {
    /// Open a checking account
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NegativeOverdraftLimit` if `overdraft_limit < 0`.
    pub fn new(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        overdraft_limit: Decimal,
        initial_balance: Decimal,
    ) -> Result<Self, AccountError> {
        if overdraft_limit < Decimal::ZERO {
            return Err(AccountError::NegativeOverdraftLimit {
                limit: overdraft_limit,
            });
        }

        Ok(CheckingAccount {
            account: Account::new(number, holder, initial_balance),
            overdraft_limit,
        })
    }

    /// Open a checking account with a zero balance
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NegativeOverdraftLimit` if `overdraft_limit < 0`.
    pub fn open(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        overdraft_limit: Decimal,
    ) -> Result<Self, AccountError> {
        CheckingAccount::new(number, holder, overdraft_limit, Decimal::ZERO)
    }

    /// Maximum magnitude the balance may go negative
    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }
}

impl BankAccount for CheckingAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Checking
    }

    fn number(&self) -> &AccountNumber {
        self.account.number()
    }

    fn holder(&self) -> &str {
        self.account.holder()
    }

    fn balance(&self) -> Decimal {
        self.account.balance()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Receipt, AccountError> {
        self.account.deposit_as(AccountKind::Checking, amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, AccountError> {
        self.account
            .withdraw_as(AccountKind::Checking, amount, Some(self.overdraft_limit))
    }
}

impl fmt::Display for CheckingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.account.fmt_summary(AccountKind::Checking, f)?;
        write!(
            f,
            " Overdraft Limit: ${:.2}",
            round_for_display(self.overdraft_limit, CURRENCY_PLACES)
        )
    }
}
