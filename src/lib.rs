//! Bank Accounts Library
//! # Overview
//!
//! A small account hierarchy: a base account with deposit, withdrawal, balance
//! query and rendering, plus two specialized variants.
//!
//! # Architecture
//!
//! - [`types`] - Identity, receipts, errors and display rounding
//! - [`core`] - The account hierarchy:
//!   - [`core::traits`] - The [`BankAccount`] contract
//!   - [`core::account`] - Base account and shared balance rules
//!   - [`core::savings`] - Savings account with on-demand interest
//!   - [`core::checking`] - Checking account with an overdraft limit
//! - [`demo`] - The fixed demonstration sequence run by the binary
//! - [`cli`] - CLI arguments parsing
//!
//! # Account Variants
//!
//! - **Account**: withdrawals need `balance >= amount`
//! - **SavingsAccount**: base rules plus `add_interest`, crediting
//!   `balance * rate / 100`
//! - **CheckingAccount**: withdrawals need `balance - amount >= -overdraft_limit`
//!
//! Operations never print. Each returns a [`Receipt`] on success or an
//! [`AccountError`] on rejection, and a rejection leaves the account unchanged.

// Module declarations
pub mod cli;
pub mod core;
pub mod demo;
pub mod types;

pub use crate::core::{Account, BankAccount, CheckingAccount, SavingsAccount};
pub use crate::types::{AccountError, AccountKind, AccountNumber, Receipt, TransactionKind};
