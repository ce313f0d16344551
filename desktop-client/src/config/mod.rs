mod display_config;
mod game_config;
mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use display_config::DisplayConfig;
pub use game_config::GameConfig;
pub use main_config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;
