//! Base account
//!
//! This module provides the `Account` struct, which holds an account's
//! identity and balance and implements the balance rules shared by every
//! variant:
//! - Deposits and withdrawals must be strictly positive
//! - Balances change through checked arithmetic only
//! - A rejected operation leaves the balance untouched
//!
//! `SavingsAccount` and `CheckingAccount` wrap an `Account` and reuse these
//! rules, choosing their own withdrawal floor and labels.

use crate::core::traits::BankAccount;
use crate::types::money::{round_for_display, CURRENCY_PLACES};
use crate::types::{AccountError, AccountKind, AccountNumber, Receipt, TransactionKind};
use rust_decimal::Decimal;
use std::fmt;
use tracing::{debug, info, warn};

/// Base bank account
///
/// Withdrawals may never take the balance below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    balance: Decimal,
}

impl Account {
    /// Open an account with the given starting balance
    ///
    /// The initial balance is taken as given.
    pub fn new(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        initial_balance: Decimal,
    ) -> Self {
        Account {
            number: number.into(),
            holder: holder.into(),
            balance: initial_balance,
        }
    }

    /// Open an account with a zero balance
    pub fn open(number: impl Into<AccountNumber>, holder: impl Into<String>) -> Self {
        Account::new(number, holder, Decimal::ZERO)
    }

    /// Validate and apply a deposit, labelling the receipt with `kind`
    pub(crate) fn deposit_as(
        &mut self,
        kind: AccountKind,
        amount: Decimal,
    ) -> Result<Receipt, AccountError> {
        self.ensure_positive(TransactionKind::Deposit, amount)?;
        self.credit(kind, TransactionKind::Deposit, amount)
    }

    /// Validate and apply a withdrawal, labelling the receipt with `kind`
    ///
    /// With no `overdraft_limit` the withdrawal needs `balance >= amount`.
    /// With a limit it needs `balance - amount >= -limit`.
    pub(crate) fn withdraw_as(
        &mut self,
        kind: AccountKind,
        amount: Decimal,
        overdraft_limit: Option<Decimal>,
    ) -> Result<Receipt, AccountError> {
        self.ensure_positive(TransactionKind::Withdrawal, amount)?;

        // Check if sufficient funds exist
        if overdraft_limit.is_none() && self.balance < amount {
            return Err(self.rejected(AccountError::insufficient_funds(
                &self.number,
                self.balance,
                amount,
            )));
        }

        let new_balance = match (self.balance.checked_sub(amount), overdraft_limit) {
            (Some(new_balance), Some(limit)) if new_balance >= -limit => new_balance,
            (Some(new_balance), None) => new_balance,
            // A difference below -Decimal::MAX is below every -limit too
            (_, Some(limit)) => {
                return Err(self.rejected(AccountError::overdraft_limit_exceeded(
                    &self.number,
                    self.balance,
                    amount,
                    limit,
                )));
            }
            (None, None) => {
                warn!(account = %self.number, %amount, "withdrawal would overflow the balance");
                return Err(AccountError::arithmetic_overflow(
                    TransactionKind::Withdrawal,
                    &self.number,
                ));
            }
        };

        self.balance = new_balance;
        debug!(
            account = %self.number,
            operation = TransactionKind::Withdrawal.name(),
            %amount,
            balance = %self.balance,
            "debited"
        );

        Ok(self.receipt(kind, TransactionKind::Withdrawal, amount))
    }

    /// Add `amount` to the balance without validating its sign
    ///
    /// Used for deposits (after validation) and for savings interest, which
    /// may legitimately be zero.
    pub(crate) fn credit(
        &mut self,
        kind: AccountKind,
        operation: TransactionKind,
        amount: Decimal,
    ) -> Result<Receipt, AccountError> {
        let new_balance = self.balance.checked_add(amount).ok_or_else(|| {
            warn!(account = %self.number, %amount, operation = operation.name(), "credit would overflow the balance");
            AccountError::arithmetic_overflow(operation, &self.number)
        })?;

        self.balance = new_balance;
        debug!(
            account = %self.number,
            operation = operation.name(),
            %amount,
            balance = %self.balance,
            "credited"
        );

        Ok(self.receipt(kind, operation, amount))
    }

    /// Write the fields every variant's rendering starts with
    pub(crate) fn fmt_summary(&self, kind: AccountKind, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} Holder: {} Balance: ${:.2}",
            kind,
            self.number,
            self.holder,
            round_for_display(self.balance, CURRENCY_PLACES)
        )
    }

    fn ensure_positive(
        &self,
        operation: TransactionKind,
        amount: Decimal,
    ) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(self.rejected(AccountError::non_positive_amount(operation, amount)));
        }
        Ok(())
    }

    fn rejected(&self, error: AccountError) -> AccountError {
        info!(account = %self.number, reason = %error, "operation rejected");
        error
    }

    fn receipt(&self, kind: AccountKind, operation: TransactionKind, amount: Decimal) -> Receipt {
        Receipt {
            kind: operation,
            account_kind: kind,
            account: self.number.clone(),
            amount,
            balance: self.balance,
        }
    }
}

impl BankAccount for Account {
    fn kind(&self) -> AccountKind {
        AccountKind::Standard
    }

    fn number(&self) -> &AccountNumber {
        &self.number
    }

    fn holder(&self) -> &str {
        &self.holder
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Receipt, AccountError> {
        self.deposit_as(AccountKind::Standard, amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, AccountError> {
        self.withdraw_as(AccountKind::Standard, amount, None)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_summary(AccountKind::Standard, f)
    }
}
