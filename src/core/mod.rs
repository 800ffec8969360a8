//! Core business logic module
//!
//! This module contains the account hierarchy:
//! - `traits` - The `BankAccount` contract shared by every variant
//! - `account` - Base account and the shared balance rules
//! - `savings` - Interest-bearing savings account
//! - `checking` - Checking account with an overdraft limit

pub mod account;
pub mod checking;
pub mod savings;
pub mod traits;

pub use account::Account;
pub use checking::CheckingAccount;
pub use savings::SavingsAccount;
pub use traits::BankAccount;
