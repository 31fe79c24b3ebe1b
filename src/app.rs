use crate::config::Config;
use crate::providers::{geo, whatsapp};
use crate::render;
use crate::report;
use crate::validate::PhoneNumber;
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter the phone number (with country code): ";
const INVALID_NUMBER: &str =
  "Invalid phone number format. Please enter a valid international number.";
const CREDENTIALS_HINT: &str = "Check your API key and host configuration";

pub struct App {
  config: Config,
  client: Client,
}

impl App {
  /// Builds the HTTP client shared by both lookups.
  ///
  /// # Errors
  ///
  /// Returns an error if the TLS backend cannot be initialised.
  pub fn new(config: Config) -> Result<Self> {
    let client = Client::builder()
      .user_agent(format!("whatsinfo/{}", env!("CARGO_PKG_VERSION")))
      .build()
      .context("Failed to build HTTP client")?;
    Ok(Self { config, client })
  }

  /// Shows the banner, reads one line from stdin and handles it.
  ///
  /// # Errors
  ///
  /// Returns an error if stdin cannot be read or stdout cannot be written.
  pub async fn run(&self) -> Result<()> {
    let mut out = io::stdout();
    report::banner(&mut out)?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin()
      .lock()
      .read_line(&mut line)
      .context("Failed to read the phone number from stdin")?;

    self.process_input(&line, &mut out).await?;
    Ok(())
  }

  /// Validates `raw` and, if it is a plausible number, runs the lookup.
  ///
  /// Invalid input is reported on `out` and no request is made.
  ///
  /// # Errors
  ///
  /// Returns an error only if writing to `out` fails.
  pub async fn process_input<W: Write>(
    &self,
    raw: &str,
    out: &mut W,
  ) -> io::Result<()> {
    let Some(number) = PhoneNumber::parse(raw) else {
      return report::error(out, INVALID_NUMBER);
    };
    report::info(out, &format!("Checking number: {number}"))?;
    self.lookup(&number, out).await
  }

  /// Queries the number info API, prints its answer, then prints the
  /// geolocation of the IP address found in it.
  ///
  /// A failed number lookup is reported and ends the lookup. A failed
  /// geolocation lookup is reported and degrades to "no location data".
  ///
  /// # Errors
  ///
  /// Returns an error only if writing to `out` fails.
  pub async fn lookup<W: Write>(
    &self,
    number: &PhoneNumber,
    out: &mut W,
  ) -> io::Result<()> {
    let spinner = report::spinner("Querying number info...");
    let result =
      whatsapp::fetch_number_info(number, &self.config, &self.client).await;
    spinner.finish_and_clear();

    let data = match result {
      Ok(data) => data,
      Err(e) => {
        report::error(out, &e.to_string())?;
        if e.is_unauthorized() {
          report::error(out, CREDENTIALS_HINT)?;
        }
        return Ok(());
      }
    };

    report::header(out, "WhatsApp Information")?;
    render::write_tree(out, &data, 0)?;

    let ip = whatsapp::extract_ip(&data);
    report::header(out, "Location Information")?;
    match self.locate(ip.as_deref(), out).await? {
      Some(location) => render::write_tree(out, &location, 0),
      None => report::notice(
        out,
        &format!(
          "No location data available for IP: {}",
          ip.as_deref().unwrap_or(whatsapp::UNKNOWN_IP)
        ),
      ),
    }
  }

  async fn locate<W: Write>(
    &self,
    ip: Option<&str>,
    out: &mut W,
  ) -> io::Result<Option<Value>> {
    let spinner = report::spinner("Querying geolocation...");
    let result = geo::fetch_location(ip, &self.config, &self.client).await;
    spinner.finish_and_clear();

    match result {
      Ok(location) => Ok(location),
      Err(e) => {
        log::debug!("Geolocation lookup failed: {e:?}");
        report::error(out, &format!("Location data error: {e}"))?;
        Ok(None)
      }
    }
  }
}
