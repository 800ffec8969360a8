//! Bank Accounts CLI
//!
//! Runs the fixed account demonstration and prints its outcome lines to
//! stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --log-level debug
//! RUST_LOG=bank_accounts=info cargo run
//! ```
//!
//! Diagnostics go to stderr through `tracing`, so stdout only carries the
//! demonstration output.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (output could not be written)

use bank_accounts::cli;
use bank_accounts::demo;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    tracing_subscriber::registry()
        .with(args.env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if let Err(e) = demo::run(&mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
