use common::config::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ClientConfigManager, ConfigManager, DisplayConfig, GameConfig};

pub const DEFAULT_CONFIG_FILE: &str = "snake_client_config.yaml";

pub fn get_config_manager(path: impl AsRef<Path>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
    /// Fixed seed for reproducible games; a fresh one is drawn per game when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.display.validate()?;
        Ok(())
    }
}
