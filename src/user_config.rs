use serde::{Deserialize, Serialize};

const APP_NAME: &str = "whatsinfo";
const FILE_NAME: Option<&str> = None;

/// Credentials persisted in the user config file, used when the environment
/// does not provide them.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct UserConfig {
  pub rapidapi_key: Option<String>,
  pub rapidapi_host: Option<String>,
}

/// Read ~/.config/whatsinfo/default-config.toml (or OS equivalent).
pub fn load() -> UserConfig {
  confy::load(APP_NAME, FILE_NAME).unwrap_or_else(|e| {
    log::debug!("Ignoring unreadable user config: {e}");
    UserConfig::default()
  })
}
