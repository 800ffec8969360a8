//! Interest-bearing savings account

use crate::core::account::Account;
use crate::core::traits::BankAccount;
use crate::types::money::{round_for_display, RATE_PLACES};
use crate::types::{AccountError, AccountKind, AccountNumber, Receipt, TransactionKind};
use rust_decimal::Decimal;
use std::fmt;
use tracing::warn;

/// Savings account with a fixed interest rate
///
/// Deposits and withdrawals follow the base account rules. Interest is only
/// credited when [`SavingsAccount::add_interest`] is called; there is no
/// compounding schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsAccount {
    account: Account,

    /// Interest rate as a percentage (5.0 means 5%)
    interest_rate: Decimal,
}

impl SavingsAccount {
    /// Open a savings account
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NegativeInterestRate` if `interest_rate < 0`.
    pub fn new(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        interest_rate: Decimal,
        initial_balance: Decimal,
    ) -> Result<Self, AccountError> {
        if interest_rate < Decimal::ZERO {
            return Err(AccountError::NegativeInterestRate {
                rate: interest_rate,
            });
        }

        Ok(SavingsAccount {
            account: Account::new(number, holder, initial_balance),
            interest_rate,
        })
    }

    /// Open a savings account with a zero balance
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NegativeInterestRate` if `interest_rate < 0`.
    pub fn open(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        interest_rate: Decimal,
    ) -> Result<Self, AccountError> {
        SavingsAccount::new(number, holder, interest_rate, Decimal::ZERO)
    }

    /// Interest rate as a percentage
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Credit `balance * interest_rate / 100` to the account
    ///
    /// The receipt's amount is the interest credited. A zero balance or a
    /// zero rate credits nothing but still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::ArithmeticOverflow` if computing or crediting
    /// the interest would overflow.
    pub fn add_interest(&mut self) -> Result<Receipt, AccountError> {
        let interest = self
            .account
            .balance()
            .checked_mul(self.interest_rate)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| {
                warn!(account = %self.account.number(), rate = %self.interest_rate, "interest would overflow");
                AccountError::arithmetic_overflow(TransactionKind::Interest, self.account.number())
            })?;

        self.account
            .credit(AccountKind::Savings, TransactionKind::Interest, interest)
    }
}

impl BankAccount for SavingsAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Savings
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
        self.account.deposit_as(AccountKind::Savings, amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, AccountError> {
        self.account.withdraw_as(AccountKind::Savings, amount, None)
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.account.fmt_summary(AccountKind::Savings, f)?;
        write!(
            f,
            " Interest Rate: {:.1}%",
            round_for_display(self.interest_rate, RATE_PLACES)
        )
    }
}
