//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account identity and variant labels
//! - `transaction`: Transaction kinds and receipts
//! - `money`: Display rounding for monetary values
//! - `error`: Error types for account operations

pub mod account;
pub mod error;
pub mod money;
pub mod transaction;

pub use account::{AccountKind, AccountNumber};
pub use error::AccountError;
pub use money::round_for_display;
pub use transaction::{Receipt, TransactionKind};
