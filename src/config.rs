use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
  #[serde(default)]
  pub node: NodeSettings,
  #[serde(default)]
  pub scanner: ScannerSettings,
  #[serde(default)]
  pub content_store: ContentStoreSettings,
  #[serde(default)]
  pub repository: RepositorySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NodeSettings {
  #[serde(default = "default_rpc_url")]
  pub rpc_url: String,
  // 0 means "up to the current head"
  #[serde(default = "default_end_block")]
  pub end_block: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScannerSettings {
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentStoreSettings {
  #[serde(default = "default_content_api")]
  pub api_url: String,
  #[serde(default = "default_gateway")]
  pub gateway_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RepositorySettings {
  #[serde(default = "default_memory_db")]
  pub memory_db: bool,
  #[serde(default)]
  pub postgresql_url: String,
}

fn default_rpc_url() -> String {
  "http://127.0.0.1:7545".to_string()
}

fn default_end_block() -> u64 {
  5
}

fn default_timeout_secs() -> u64 {
  300
}

fn default_content_api() -> String {
  "http://127.0.0.1:5001".to_string()
}

fn default_gateway() -> String {
  "http://localhost:8080".to_string()
}

fn default_memory_db() -> bool {
  true
}

impl Default for NodeSettings {
  fn default() -> Self {
    Self { rpc_url: default_rpc_url(), end_block: default_end_block() }
  }
}

impl Default for ScannerSettings {
  fn default() -> Self {
    Self { timeout_secs: default_timeout_secs() }
  }
}

impl Default for ContentStoreSettings {
  fn default() -> Self {
    Self { api_url: default_content_api(), gateway_url: default_gateway() }
  }
}

impl Default for RepositorySettings {
  fn default() -> Self {
    Self { memory_db: default_memory_db(), postgresql_url: String::new() }
  }
}

impl Settings {
  pub fn new() -> Result<Self, config::ConfigError> {
    Self::from_path("./config.toml")
  }

  pub fn from_path(path: &str) -> Result<Self, config::ConfigError> {
    let env_prefix = "APP"; // e.g. APP_NODE__RPC_URL=http://...

    let builder = config::Config::builder()
      .add_source(config::File::with_name(path).required(false))
      // APP_NODE__RPC_URL=http://... overrides the file value
      .add_source(config::Environment::with_prefix(env_prefix).prefix_separator("_").separator("__"));

    builder.build()?.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let settings = Settings::from_path("./does-not-exist.toml").unwrap();
    assert_eq!(settings.node.rpc_url, "http://127.0.0.1:7545");
    assert_eq!(settings.node.end_block, 5);
    assert!(settings.repository.memory_db);
    assert_eq!(settings.content_store.gateway_url, "http://localhost:8080");
  }

  #[test]
  fn single_underscore_prefix_overrides_file_values() {
    // only this test touches scanner.timeout_secs
    std::env::set_var("APP_SCANNER__TIMEOUT_SECS", "42");
    let settings = Settings::from_path("./does-not-exist.toml").unwrap();
    std::env::remove_var("APP_SCANNER__TIMEOUT_SECS");
    assert_eq!(settings.scanner.timeout_secs, 42);
  }
}
