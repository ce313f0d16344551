use common::{Direction, GameStatus};
use eframe::egui;
use std::time::Duration;

use super::drawer::Drawer;
use crate::offline::SnakeRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Turn(Direction),
    TogglePause,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeUiAction {
    None,
    BackToMenu,
}

pub fn input_for_key(key: egui::Key) -> Option<SnakeInput> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(SnakeInput::Turn(Direction::Up)),
        egui::Key::ArrowDown | egui::Key::S => Some(SnakeInput::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(SnakeInput::Turn(Direction::Left)),
        egui::Key::ArrowRight | egui::Key::D => Some(SnakeInput::Turn(Direction::Right)),
        egui::Key::Space | egui::Key::Escape => Some(SnakeInput::TogglePause),
        egui::Key::Enter => Some(SnakeInput::Restart),
        _ => None,
    }
}

pub struct SnakeGameUi {
    drawer: Drawer,
}

impl SnakeGameUi {
    pub fn new() -> Self {
        Self {
            drawer: Drawer::new(),
        }
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        runner: &mut SnakeRunner,
        elapsed: Duration,
    ) -> SnakeUiAction {
        self.handle_input(ctx, runner);
        runner.advance(elapsed);

        let mut action = SnakeUiAction::None;

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                if ui.button("Menu").clicked() {
                    action = SnakeUiAction::BackToMenu;
                }
                ui.label(format!("Length: {}", runner.gameplay().tail().len() + 1));
            });
            ui.add_space(8.0);

            self.drawer.draw(ui, runner.gameplay());

            ui.add_space(8.0);
            Self::render_status(ui, runner);

            if runner.gameplay().status() != GameStatus::Running && ui.button("Play again").clicked() {
                runner.restart();
            }
        });

        ctx.request_repaint_after(runner.time_until_next_tick());
        action
    }

    fn render_status(ui: &mut egui::Ui, runner: &SnakeRunner) {
        match runner.gameplay().status() {
            GameStatus::Lost => {
                ui.label(
                    egui::RichText::new("You lost! Press Enter to play again")
                        .color(egui::Color32::RED)
                        .size(20.0),
                );
            }
            GameStatus::Won => {
                ui.label(
                    egui::RichText::new("The field is full. You won!")
                        .color(egui::Color32::GREEN)
                        .size(20.0),
                );
            }
            GameStatus::Running if runner.is_paused() => {
                ui.label(egui::RichText::new("Paused").size(20.0));
            }
            GameStatus::Running => {
                ui.label("Arrow keys or WASD to move, Space to pause");
            }
        }
    }

    fn handle_input(&self, ctx: &egui::Context, runner: &mut SnakeRunner) {
        let inputs: Vec<SnakeInput> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => input_for_key(*key),
                    _ => None,
                })
                .collect()
        });

        for input in inputs {
            match input {
                SnakeInput::Turn(direction) => runner.turn(direction),
                SnakeInput::TogglePause => runner.toggle_pause(),
                SnakeInput::Restart => {
                    if runner.gameplay().status() != GameStatus::Running {
                        runner.restart();
                    }
                }
            }
        }
    }
}
