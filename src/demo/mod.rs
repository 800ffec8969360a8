//! Demonstration sequence
//!
//! Opens one savings and one checking account, runs a fixed series of
//! operations on them and writes one line per outcome, followed by a blank
//! line and the rendering of each account.
//!
//! # Output
//!
//! ```text
//! Deposited $100.00 into account SA001.
//! Interest of $55.00 added to Savings Account SA001.
//! Withdrew $50.00 from account SA001.
//! Withdrew $50.00 from Checking Account CA001.
//! Withdrawal exceeds overdraft limit.
//!
//! Savings Account #SA001 Holder: John Smith Balance: $1105.00 Interest Rate: 5.0%
//! Checking Account #CA001 Holder: Jane Doe Balance: $-50.00 Overdraft Limit: $100.00
//! ```

use crate::core::{BankAccount, CheckingAccount, SavingsAccount};
use crate::types::{AccountError, Receipt};
use rust_decimal::Decimal;
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

/// Fatal errors that stop the demonstration
///
/// Rejected account operations are not fatal; they are written as outcome
/// lines like any other result.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// One of the demo accounts could not be opened
    #[error("Could not open account: {0}")]
    Account(#[from] AccountError),
}

/// Run the demonstration, writing every outcome line to `output`
///
/// # Errors
///
/// Returns an error if writing to `output` fails or an account cannot be
/// opened.
pub fn run(output: &mut dyn Write) -> Result<(), DemoError> {
    debug!("starting demonstration");

    let mut savings = SavingsAccount::new(
        "SA001",
        "John Smith",
        Decimal::new(50, 1),
        Decimal::new(10000, 1),
    )?;
    report(output, savings.deposit(Decimal::new(100, 0)))?;
    report(output, savings.add_interest())?;
    report(output, savings.withdraw(Decimal::new(50, 0)))?;

    let mut checking = CheckingAccount::new(
        "CA001",
        "Jane Doe",
        Decimal::new(1000, 1),
        Decimal::new(0, 1),
    )?;
    report(output, checking.withdraw(Decimal::new(50, 0)))?;
    report(output, checking.withdraw(Decimal::new(100, 0)))?;

    writeln!(output)?;
    let accounts: [&dyn BankAccount; 2] = [&savings, &checking];
    for account in accounts {
        writeln!(output, "{}", account.describe())?;
    }

    debug!("demonstration finished");
    Ok(())
}

/// Write the outcome line of a single operation
fn report(output: &mut dyn Write, outcome: Result<Receipt, AccountError>) -> io::Result<()> {
    match outcome {
        Ok(receipt) => writeln!(output, "{}", receipt),
        Err(error) => writeln!(output, "{}", error),
    }
}
