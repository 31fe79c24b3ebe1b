//! Clients for the two lookup APIs.

pub mod geo;
pub mod whatsapp;

use crate::error::LookupError;
use reqwest::RequestBuilder;
use serde_json::Value;

/// Sends `request` and parses the body of a 2xx response as a JSON value.
///
/// The body is read as text first so that a malformed body surfaces as
/// [`LookupError::Decode`] rather than as a transport error.
async fn get_json(request: RequestBuilder) -> Result<Value, LookupError> {
  let response = request.send().await?;
  let status = response.status();
  let url = response.url().to_string();
  log::debug!("GET {url} -> {status}");

  if !status.is_success() {
    return Err(LookupError::Status { status, url });
  }

  let body = response.text().await?;
  serde_json::from_str(&body).map_err(LookupError::Decode)
}
