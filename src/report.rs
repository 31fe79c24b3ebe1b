//! Banner, section headers and status lines for the interactive session.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

const BANNER: &str = r"
     __i
    |---|
    |[_]|
    |:::|
    |:::|
    `\   \
      \_=_\
    WhatsApp Number Information Lookup
";

pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
  writeln!(out, "{}", style(BANNER).green())
}

/// Prints a section header ("WhatsApp Information:") after a blank line.
pub fn header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
  writeln!(out, "\n{}", style(format!("{title}:")).green())
}

pub fn info<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
  writeln!(out, "{}", style(message).cyan())
}

pub fn notice<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
  writeln!(out, "{}", style(message).yellow())
}

pub fn error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
  writeln!(out, "{}", style(message).red())
}

/// A spinner on stderr while a request is in flight. Hidden when stderr is
/// not a terminal.
pub fn spinner(message: &'static str) -> ProgressBar {
  let bar = ProgressBar::new_spinner().with_message(message);
  if let Ok(spinner_style) =
    ProgressStyle::with_template("{spinner:.green} {msg}")
  {
    bar.set_style(spinner_style);
  }
  bar.enable_steady_tick(Duration::from_millis(100));
  bar
}
