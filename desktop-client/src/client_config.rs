use common::Mark;
use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_client_config.yaml";
const DEFAULT_SERVER_ADDRESS: &str = "http://127.0.0.1:8080";
const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub server_address: String,
    pub poll_interval_ms: u64,
    pub mark: Mark,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            mark: Mark::X,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.server_address.is_empty() {
            return Err("server_address must not be empty".to_string());
        }
        if !self.server_address.starts_with("http://") && !self.server_address.starts_with("https://")
        {
            return Err(format!(
                "server_address '{}' must start with http:// or https://",
                self.server_address
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be positive".to_string());
        }
        if !self.mark.is_player() {
            return Err("mark must be X or O".to_string());
        }
        Ok(())
    }
}

pub fn get_config_manager(
    config_path: &str,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(config_path)
}
