//! Binary entry point: wires up logging and runs the menu shell over
//! stdin/stdout.

use discount_journal::{shell, Journal};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut journal = Journal::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut journal, &mut stdin.lock(), &mut stdout.lock())
}
