//! Terminal output formatting
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

use crate::cli::args::STEPS_HELP;

/// Print error (red bold "error:" prefix) to stderr
///
/// A closed stderr is ignored; the exit code still reports the failure.
pub fn error(msg: &(impl Display + ?Sized)) {
    let _ = writeln!(io::stderr(), "{}: {}", "error".red().bold(), msg);
}

/// Write plain output (no color, for step data)
pub fn info(out: &mut dyn Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg)
}

/// Write the step reference
pub fn help(out: &mut dyn Write) -> io::Result<()> {
    info(out, STEPS_HELP)
}
