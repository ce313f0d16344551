use common::config::{Validate, ensure_in_range};
use common::FieldPreset;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub field_preset: FieldPreset,
    pub tick_interval_ms: u32,
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        ensure_in_range("tick_interval_ms", self.tick_interval_ms, 50..=1000)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_preset: FieldPreset::default(),
            tick_interval_ms: 150,
        }
    }
}
