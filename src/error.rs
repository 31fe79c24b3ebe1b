//! Error types shared by the configuration layer and the API clients.

use reqwest::StatusCode;
use thiserror::Error;

/// Startup failures. These halt the program before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(
    "Missing {} in environment, .env file or user config",
    .0.join(" and ")
  )]
  MissingCredentials(Vec<&'static str>),
}

/// A failed request to one of the lookup APIs.
///
/// Each variant maps to a distinct message for the operator. None of them
/// are fatal to the process.
#[derive(Debug, Error)]
pub enum LookupError {
  #[error("HTTP Error: {status} for url: {url}")]
  Status { status: StatusCode, url: String },

  #[error("Request timed out. API might be slow or unavailable.")]
  Timeout,

  #[error("Request Error: {0}")]
  Network(#[source] reqwest::Error),

  #[error("Error decoding JSON response.")]
  Decode(#[source] serde_json::Error),

  #[error("An unexpected error occurred: {0}")]
  Unclassified(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LookupError {
  /// True when the API refused our credentials.
  #[must_use]
  pub fn is_unauthorized(&self) -> bool {
    matches!(
      self,
      Self::Status { status, .. } if *status == StatusCode::UNAUTHORIZED
    )
  }
}

impl From<reqwest::Error> for LookupError {
  fn from(e: reqwest::Error) -> Self {
    if e.is_timeout() {
      Self::Timeout
    } else if let Some(status) = e.status() {
      Self::Status {
        status,
        url: e.url().map(ToString::to_string).unwrap_or_default(),
      }
    } else if e.is_builder() {
      Self::Unclassified(Box::new(e))
    } else {
      Self::Network(e)
    }
  }
}
