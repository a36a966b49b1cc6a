//! `cm-cli` subcommands.

use std::fmt::Display;
use std::io::{self, Write};

pub mod cart;
pub mod checkout;
pub mod community;

/// Write command output to stdout. Logs go to stderr.
fn emit(output: impl Display) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()
}
