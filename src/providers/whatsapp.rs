//! WhatsApp number info lookup through RapidAPI.

use super::get_json;
use crate::config::Config;
use crate::error::LookupError;
use crate::validate::PhoneNumber;
use reqwest::Client;
use serde_json::Value;

/// Response fields that may hold the account's IP address, in priority order.
pub const IP_FIELDS: [&str; 3] = ["ip", "last_ip", "connected_ip"];

/// Shown in place of an IP address when the response carries none.
pub const UNKNOWN_IP: &str = "unknown";

/// Fetches the metadata the API holds for `number`.
///
/// Sends one `GET {number_api_url}/number/{digits}` carrying the
/// `x-rapidapi-key` and `x-rapidapi-host` headers, bounded by
/// `config.number_timeout`. The body has no fixed schema and is returned as
/// is.
///
/// # Errors
///
/// - [`LookupError::Status`] for a non-2xx response
/// - [`LookupError::Timeout`] if no full response arrives in time
/// - [`LookupError::Network`] for other transport failures
/// - [`LookupError::Decode`] if the body is not JSON
/// - [`LookupError::Unclassified`] if the request cannot be built
pub async fn fetch_number_info(
  number: &PhoneNumber,
  config: &Config,
  client: &Client,
) -> Result<Value, LookupError> {
  let request = client
    .get(config.number_url(number.as_str()))
    .header("x-rapidapi-key", &config.api_key)
    .header("x-rapidapi-host", &config.api_host)
    .timeout(config.number_timeout);

  get_json(request).await
}

/// Picks the first usable value among [`IP_FIELDS`].
///
/// Non-empty strings and non-zero numbers are usable; numbers are passed on
/// in their JSON form. `null`, `""`, `0`, booleans and containers fall
/// through to the next field.
///
/// Returns `None` (the "unknown" sentinel) when `data` is not an object or
/// none of the fields hold a usable value.
#[must_use]
pub fn extract_ip(data: &Value) -> Option<String> {
  let map = data.as_object()?;
  IP_FIELDS
    .iter()
    .filter_map(|field| map.get(*field))
    .find_map(ip_text)
}

fn ip_text(value: &Value) -> Option<String> {
  match value {
    Value::String(s) if !s.is_empty() => Some(s.clone()),
    Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => {
      Some(n.to_string())
    }
    _ => None,
  }
}
