use common::FieldPreset;
use eframe::egui;

use crate::config::GameConfig;

/// Pre-game screen: pick the field size and speed, then start.
pub struct MenuUi {
    game: GameConfig,
}

impl MenuUi {
    pub fn new(game: GameConfig) -> Self {
        Self { game }
    }

    /// Returns the chosen settings once "Start" is pressed.
    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> Option<GameConfig> {
        let mut start = ctx.input(|i| i.key_pressed(egui::Key::Enter));

        ui.vertical_centered(|ui| {
            ui.heading("Mongoose Snake");
            ui.add_space(16.0);

            egui::ComboBox::from_label("Field size")
                .selected_text(preset_text(self.game.field_preset))
                .show_ui(ui, |ui| {
                    for preset in FieldPreset::ALL {
                        ui.selectable_value(&mut self.game.field_preset, preset, preset_text(preset));
                    }
                });

            ui.add(
                egui::Slider::new(&mut self.game.tick_interval_ms, 50..=1000)
                    .text("Tick interval (ms)"),
            );

            ui.add_space(16.0);
            if ui.button("Start").clicked() {
                start = true;
            }

            ui.add_space(16.0);
            ui.label("Eat fruit to grow. Avoid the walls, your tail and the mongooses.");
            ui.label("Arrow keys or WASD to move, Space to pause, Enter to restart.");
        });

        start.then_some(self.game)
    }
}

fn preset_text(preset: FieldPreset) -> String {
    format!("{0} ({1}x{1})", preset.label(), preset.field_size())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_text_shows_dimensions() {
        assert_eq!(preset_text(FieldPreset::Medium), "Medium (20x20)");
    }
}
