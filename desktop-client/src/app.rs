use common::log;
use eframe::egui;
use std::time::{Duration, Instant};

use crate::config::{ClientConfigManager, Config, GameConfig};
use crate::offline::SnakeRunner;
use crate::ui::{MenuUi, SnakeGameUi, SnakeUiAction};

enum Screen {
    Menu,
    Playing(SnakeRunner),
}

enum AppAction {
    None,
    Start(GameConfig),
    BackToMenu,
}

pub struct SnakeApp {
    config_manager: ClientConfigManager,
    config: Config,
    screen: Screen,
    menu_ui: MenuUi,
    game_ui: SnakeGameUi,
    last_frame: Option<Instant>,
}

impl SnakeApp {
    /// `config` is the effective config for this run, command-line overrides included.
    pub fn new(config_manager: ClientConfigManager, config: Config) -> Self {
        Self {
            menu_ui: MenuUi::new(config.game),
            game_ui: SnakeGameUi::new(),
            config_manager,
            config,
            screen: Screen::Menu,
            last_frame: None,
        }
    }

    /// Runs a game immediately instead of showing the menu first.
    pub fn start_immediately(mut self) -> Self {
        self.screen = Screen::Playing(self.create_runner());
        self
    }

    fn create_runner(&self) -> SnakeRunner {
        let settings = self.config.display.game_settings(self.config.game.field_preset);
        SnakeRunner::new(settings, self.config.game.tick_interval(), self.config.seed)
    }

    fn start_game(&mut self, game: GameConfig) {
        self.config.game = game;
        self.save_game_choice(game);
        self.screen = Screen::Playing(self.create_runner());
    }

    /// Stores the picked preset and speed; other stored values stay as they were.
    fn save_game_choice(&self, game: GameConfig) {
        let mut stored = self.config_manager.get_config_or_default();
        if stored.game == game {
            return;
        }
        stored.game = game;
        if let Err(e) = self.config_manager.set_config(&stored) {
            log!("Failed to save config: {}", e);
        }
    }

    fn frame_time(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        elapsed
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let elapsed = self.frame_time();
        let mut action = AppAction::None;

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.screen {
            Screen::Menu => {
                if let Some(game) = self.menu_ui.render(ui, ctx) {
                    action = AppAction::Start(game);
                }
            }
            Screen::Playing(runner) => {
                if self.game_ui.render(ui, ctx, runner, elapsed) == SnakeUiAction::BackToMenu {
                    action = AppAction::BackToMenu;
                }
            }
        });

        match action {
            AppAction::None => {}
            AppAction::Start(game) => self.start_game(game),
            AppAction::BackToMenu => {
                self.menu_ui = MenuUi::new(self.config.game);
                self.screen = Screen::Menu;
            }
        }
    }
}
