//! Transaction-related types
//!
//! This module defines the kinds of balance mutation an account supports and
//! the receipt returned when one succeeds.

use super::account::{AccountKind, AccountNumber};
use super::money::{round_for_display, CURRENCY_PLACES};
use rust_decimal::Decimal;
use std::fmt;

/// Balance mutations supported by the account hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Whether the debit may take the balance negative depends on the
    /// account variant.
    Withdrawal,

    /// Credit `balance * rate / 100` to a savings account
    Interest,
}

impl TransactionKind {
    /// Lowercase operation name, as used in log events and error messages
    pub fn name(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Interest => "interest",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Interest => "Interest",
        };
        f.write_str(label)
    }
}

/// Record of a successful balance mutation
///
/// Returned by deposit, withdraw and add_interest. The caller decides whether
/// and how to display it; its `Display` impl renders the one-line outcome
/// message used by the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// What kind of mutation was applied
    pub kind: TransactionKind,

    /// Variant of the account the mutation was applied to
    pub account_kind: AccountKind,

    /// Number of the account the mutation was applied to
    pub account: AccountNumber,

    /// Amount moved by the mutation (credited interest for `Interest`)
    pub amount: Decimal,

    /// Account balance after the mutation
    pub balance: Decimal,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = round_for_display(self.amount, CURRENCY_PLACES);
        match self.kind {
            TransactionKind::Deposit => {
                write!(f, "Deposited ${:.2} into account {}.", amount, self.account)
            }
            TransactionKind::Withdrawal => match self.account_kind {
                AccountKind::Checking => write!(
                    f,
                    "Withdrew ${:.2} from {} {}.",
                    amount, self.account_kind, self.account
                ),
                AccountKind::Standard | AccountKind::Savings => {
                    write!(f, "Withdrew ${:.2} from account {}.", amount, self.account)
                }
            },
            TransactionKind::Interest => write!(
                f,
                "Interest of ${:.2} added to {} {}.",
                amount, self.account_kind, self.account
            ),
        }
    }
}
