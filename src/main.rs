#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use console::style;
use std::process::ExitCode;
use whatsinfo::run;

#[tokio::main]
async fn main() -> ExitCode {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("warn"),
  )
  .init();

  match run().await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{}", style(format!("Error: {e:#}")).red());
      ExitCode::FAILURE
    }
  }
}
