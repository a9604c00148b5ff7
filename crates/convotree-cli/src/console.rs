//! CLI console for formatted output

use colored::*;
use std::io::{self, Write};

/// Formatted output over any writer
pub struct CliConsole<W: Write> {
    out: W,
}

impl<W: Write> CliConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print a plain line
    pub fn line(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", message.as_ref())
    }

    /// Print an info message
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "ℹ".blue().bold(), message)
    }

    /// Print a success message
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "✓".green().bold(), message.green())
    }

    /// Print an error message
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "✗".red().bold(), message.red())
    }

    /// Print a header
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", title.bold().underline())
    }

    /// Print an exchange as two labelled lines
    pub fn exchange(&mut self, user_input: &str, ai_response: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "You:".cyan().bold(), user_input)?;
        writeln!(self.out, "{} {}", "AI:".magenta().bold(), ai_response)
    }

    /// Print a prompt without a trailing newline
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{} ", prompt.bold())?;
        self.out.flush()
    }
}
