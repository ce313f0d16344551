use serde::{Deserialize, Serialize};

use crate::config::{Validate, ensure_in_range};
use super::types::FieldPreset;

pub const CELL_LENGTH: u32 = 16;
pub const BORDER_THICKNESS: u32 = 3;

/// Field geometry. Chosen before a game starts and never changed while it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Cells per side of the square field.
    pub field_size: u32,
    pub cell_length: u32,
    pub border_thickness: u32,
}

impl GameSettings {
    pub fn from_preset(preset: FieldPreset) -> Self {
        Self {
            field_size: preset.field_size(),
            ..Self::default()
        }
    }

    /// Total rendered side length in pixels, borders included.
    pub fn field_length(&self) -> u32 {
        self.field_size * (self.cell_length + self.border_thickness) + self.border_thickness
    }

    pub fn cell_count(&self) -> usize {
        (self.field_size * self.field_size) as usize
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_size: FieldPreset::default().field_size(),
            cell_length: CELL_LENGTH,
            border_thickness: BORDER_THICKNESS,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        ensure_in_range("field_size", self.field_size, 3..=100)?;
        ensure_in_range("cell_length", self.cell_length, 4..=128)?;
        ensure_in_range("border_thickness", self.border_thickness, 0..=16)?;
        Ok(())
    }
}
