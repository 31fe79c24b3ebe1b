use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use whatsinfo::user_config::UserConfig;
use whatsinfo::{App, Config};

pub const API_KEY: &str = "test-key";
pub const API_HOST: &str = "wa.test";

/// Records the path parameter of every request a test server receives.
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
  pub fn record(&self, value: String) {
    self.0.lock().unwrap().push(value);
  }

  pub fn hits(&self) -> Vec<String> {
    self.0.lock().unwrap().clone()
  }
}

/// Serves `router` on an ephemeral localhost port and returns its base URL.
pub async fn spawn(router: Router) -> String {
  let address = SocketAddr::new(Ipv4Addr::LOCALHOST.into(), 0);
  let listener = tokio::net::TcpListener::bind(address).await.unwrap();
  let address = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, router).await.unwrap();
  });
  format!("http://{address}")
}

/// Stand-in for the number info API. Requests without the expected
/// credentials get a 401; others get `status` and the raw `body`.
pub fn number_router(
  recorder: Recorder,
  status: StatusCode,
  body: &str,
) -> Router {
  let body = body.to_string();
  Router::new().route(
    "/number/:digits",
    get(move |Path(digits): Path<String>, headers: HeaderMap| {
      let recorder = recorder.clone();
      let body = body.clone();
      async move {
        recorder.record(digits);
        let has = |name: &str, expected: &str| {
          headers.get(name).is_some_and(|v| v == expected)
        };
        let authorized =
          has("x-rapidapi-key", API_KEY) && has("x-rapidapi-host", API_HOST);
        if authorized {
          (status, body)
        } else {
          (
            StatusCode::UNAUTHORIZED,
            r#"{"message":"You are not subscribed to this API."}"#.to_string(),
          )
        }
      }
    }),
  )
}

/// A number info API that answers only after `delay`.
pub fn slow_number_router(delay: Duration) -> Router {
  Router::new().route(
    "/number/:digits",
    get(move || async move {
      tokio::time::sleep(delay).await;
      Json(serde_json::json!({"isUser": true}))
    }),
  )
}

/// Stand-in for ip-api.com.
pub fn geo_router(
  recorder: Recorder,
  status: StatusCode,
  body: Value,
) -> Router {
  Router::new().route(
    "/json/:ip",
    get(move |Path(ip): Path<String>| {
      let recorder = recorder.clone();
      let body = body.clone();
      async move {
        recorder.record(ip);
        (status, Json(body))
      }
    }),
  )
}

pub fn config(api_key: &str, number_url: &str, geo_url: &str) -> Config {
  let api_key = api_key.to_string();
  Config::from_sources(
    move |name| match name {
      "RAPIDAPI_KEY" => Some(api_key.clone()),
      "RAPIDAPI_HOST" => Some(API_HOST.to_string()),
      _ => None,
    },
    &UserConfig::default(),
  )
  .unwrap()
  .with_endpoints(number_url, geo_url)
}

/// Feeds `input` to the app as if typed at the prompt and returns the output
/// with colors stripped.
pub async fn run_input(config: Config, input: &str) -> String {
  let app = App::new(config).unwrap();
  let mut out = Vec::new();
  app.process_input(input, &mut out).await.unwrap();
  console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned()
}
