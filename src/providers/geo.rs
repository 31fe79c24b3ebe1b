//! IP geolocation service using ip-api.com.

use super::get_json;
use crate::config::Config;
use crate::error::LookupError;
use reqwest::Client;
use serde_json::Value;

/// Fetches geolocation for an IP address.
///
/// Returns `Ok(None)` without touching the network when `ip` is `None`.
/// Otherwise sends one `GET {geo_api_url}/json/{ip}` bounded by
/// `config.geo_timeout` and returns the whole response body. A 2xx answer
/// with `"status": "fail"` (private or reserved ranges) is still returned, so
/// its `message` and `query` get printed.
///
/// # Errors
/// - Failed HTTP request or timeout
/// - Non-success status code
/// - Body that is not JSON
///
/// # Example
/// ```ignore
/// let location =
///   geo::fetch_location(Some("8.8.8.8"), &config, &client).await?;
/// ```
pub async fn fetch_location(
  ip: Option<&str>,
  config: &Config,
  client: &Client,
) -> Result<Option<Value>, LookupError> {
  let Some(ip) = ip else {
    log::debug!("No IP address in the number info, skipping geolocation");
    return Ok(None);
  };

  let request = client.get(config.geo_url(ip)).timeout(config.geo_timeout);
  get_json(request).await.map(Some)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::user_config::UserConfig;

  #[tokio::test]
  async fn test_missing_ip_skips_request() {
    let config = Config::from_sources(
      |name| Some(format!("{name}-value")),
      &UserConfig::default(),
    )
    .unwrap()
    // Nothing listens here; any request would fail.
    .with_endpoints("http://127.0.0.1:9", "http://127.0.0.1:9");
    let client = Client::new();

    let location = fetch_location(None, &config, &client).await.unwrap();
    assert!(location.is_none());
  }
}
