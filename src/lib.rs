#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
pub mod config;
pub mod error;
pub mod providers;
pub mod render;
mod report;
pub mod user_config;
pub mod validate;

pub use app::App;
pub use config::Config;
pub use validate::PhoneNumber;

/// Runs one interactive lookup.
///
/// Parses the command line (only `--help` and `--version` are recognised),
/// loads the credentials, prompts for a phone number and prints the results.
///
/// # Errors
///
/// Returns an error if the credentials are missing, the HTTP client cannot be
/// built, or standard input/output cannot be used. Lookup failures are
/// reported to the user and are not errors.
pub async fn run() -> Result<()> {
  cli::Cli::parse();

  let config = Config::load()?;
  let app = App::new(config)?;
  app.run().await
}
