use common::config::Validate;
use common::games::snake::{BORDER_THICKNESS, CELL_LENGTH};
use common::{FieldPreset, GameSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct DisplayConfig {
    pub cell_length: u32,
    pub border_thickness: u32,
}

impl DisplayConfig {
    pub fn game_settings(&self, preset: FieldPreset) -> GameSettings {
        GameSettings {
            field_size: preset.field_size(),
            cell_length: self.cell_length,
            border_thickness: self.border_thickness,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        self.game_settings(FieldPreset::default()).validate()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_length: CELL_LENGTH,
            border_thickness: BORDER_THICKNESS,
        }
    }
}
