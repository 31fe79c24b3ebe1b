//! Startup configuration: credentials, endpoints and timeouts.

use crate::error::ConfigError;
use crate::user_config::{self, UserConfig};
use std::env;
use std::time::Duration;

pub const API_KEY_VAR: &str = "RAPIDAPI_KEY";
pub const API_HOST_VAR: &str = "RAPIDAPI_HOST";

pub const GEO_API_URL: &str = "http://ip-api.com";
pub const NUMBER_TIMEOUT: Duration = Duration::from_secs(10);
pub const GEO_TIMEOUT: Duration = Duration::from_secs(5);

/// Immutable settings shared by both API clients.
#[derive(Debug, Clone)]
pub struct Config {
  pub api_key: String,
  pub api_host: String,
  /// Base URL of the number info API, `https://{api_host}` unless overridden.
  pub number_api_url: String,
  pub geo_api_url: String,
  pub number_timeout: Duration,
  pub geo_timeout: Duration,
}

impl Config {
  /// Loads `.env`, then reads the credentials from the process environment,
  /// falling back to the user config file for any that are unset.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::MissingCredentials`] if either credential is
  /// absent or empty in every source.
  pub fn load() -> Result<Self, ConfigError> {
    load_dotenv();
    Self::from_sources(|name| env::var(name).ok(), &user_config::load())
  }

  /// Builds the configuration from a variable lookup and a user config.
  ///
  /// Empty values count as missing.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::MissingCredentials`] naming every missing value.
  pub fn from_sources<F>(
    lookup: F,
    user: &UserConfig,
  ) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let pick = |name: &str, fallback: Option<&String>| {
      lookup(name)
        .filter(|v| !v.is_empty())
        .or_else(|| fallback.filter(|v| !v.is_empty()).cloned())
    };
    let api_key = pick(API_KEY_VAR, user.rapidapi_key.as_ref());
    let api_host = pick(API_HOST_VAR, user.rapidapi_host.as_ref());

    match (api_key, api_host) {
      (Some(api_key), Some(api_host)) => {
        log::debug!("Using number info API host {api_host}");
        Ok(Self {
          number_api_url: format!("https://{api_host}"),
          geo_api_url: GEO_API_URL.to_string(),
          number_timeout: NUMBER_TIMEOUT,
          geo_timeout: GEO_TIMEOUT,
          api_key,
          api_host,
        })
      }
      (key, host) => {
        let mut missing = Vec::new();
        if key.is_none() {
          missing.push(API_KEY_VAR);
        }
        if host.is_none() {
          missing.push(API_HOST_VAR);
        }
        Err(ConfigError::MissingCredentials(missing))
      }
    }
  }

  /// Points the clients at different base URLs, keeping the credentials.
  #[must_use]
  pub fn with_endpoints(
    mut self,
    number_api_url: impl Into<String>,
    geo_api_url: impl Into<String>,
  ) -> Self {
    self.number_api_url = number_api_url.into();
    self.geo_api_url = geo_api_url.into();
    self
  }

  #[must_use]
  pub fn number_url(&self, digits: &str) -> String {
    format!("{}/number/{digits}", self.number_api_url.trim_end_matches('/'))
  }

  #[must_use]
  pub fn geo_url(&self, ip: &str) -> String {
    format!("{}/json/{ip}", self.geo_api_url.trim_end_matches('/'))
  }
}

/// Reads `.env` from the working directory, or from next to the executable.
fn load_dotenv() {
  match dotenvy::dotenv() {
    Ok(path) => log::debug!("Loaded environment from {}", path.display()),
    Err(_) => {
      let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(".env")))
        .filter(|path| path.exists());
      if let Some(path) = beside_exe {
        if let Err(e) = dotenvy::from_path(&path) {
          log::warn!("Could not read {}: {e}", path.display());
        }
      }
    }
  }
}
