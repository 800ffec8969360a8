//! Error types for account operations
//!
//! Every rejected operation is reported through `AccountError`. A rejected
//! operation never changes the account it was applied to, so all variants are
//! recoverable: the caller may display the error and carry on.
//!
//! # Error Categories
//!
//! - **Amount Errors**: Non-positive deposit or withdrawal amounts
//! - **Funds Errors**: Insufficient funds, overdraft limit exceeded
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **Construction Errors**: Negative interest rate or overdraft limit

use super::account::AccountNumber;
use super::transaction::TransactionKind;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for account operations
///
/// The `Display` text of each variant is the one-line outcome message shown
/// to the account holder. Context fields carry the values that caused the
/// rejection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Deposit or withdrawal of zero or a negative amount
    #[error("{operation} amount must be positive.")]
    NonPositiveAmount {
        /// Operation that was rejected
        operation: TransactionKind,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal larger than the balance of an account without overdraft
    #[error("Insufficient funds.")]
    InsufficientFunds {
        /// Account the withdrawal was attempted on
        account: AccountNumber,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal that would take a checking account below its overdraft limit
    #[error("Withdrawal exceeds overdraft limit.")]
    OverdraftLimitExceeded {
        /// Account the withdrawal was attempted on
        account: AccountNumber,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
        /// Configured overdraft limit (a non-negative magnitude)
        limit: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance intact.
    #[error("Arithmetic overflow in {} for account {account}.", .operation.name())]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: TransactionKind,
        /// Account the operation was attempted on
        account: AccountNumber,
    },

    /// Savings account opened with a negative interest rate
    #[error("Interest rate must not be negative.")]
    NegativeInterestRate {
        /// The rejected rate
        rate: Decimal,
    },

    /// Checking account opened with a negative overdraft limit
    #[error("Overdraft limit must not be negative.")]
    NegativeOverdraftLimit {
        /// The rejected limit
        limit: Decimal,
    },
}

// Helper functions for creating common errors

impl AccountError {
    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(operation: TransactionKind, amount: Decimal) -> Self {
        AccountError::NonPositiveAmount { operation, amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        AccountError::InsufficientFunds {
            account: account.clone(),
            balance,
            requested,
        }
    }

    /// Create an OverdraftLimitExceeded error
    pub fn overdraft_limit_exceeded(
        account: &AccountNumber,
        balance: Decimal,
        requested: Decimal,
        limit: Decimal,
    ) -> Self {
        AccountError::OverdraftLimitExceeded {
            account: account.clone(),
            balance,
            requested,
            limit,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: TransactionKind, account: &AccountNumber) -> Self {
        AccountError::ArithmeticOverflow {
            operation,
            account: account.clone(),
        }
    }
}
