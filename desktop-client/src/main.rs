mod app;
mod config;
mod offline;
mod ui;

use clap::{Parser, ValueEnum};
use common::logger::{self, LogLevel};
use common::{log, FieldPreset};
use eframe::egui;
use std::path::PathBuf;

use app::SnakeApp;
use config::{get_config_manager, DEFAULT_CONFIG_FILE};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FieldArg {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

impl From<FieldArg> for FieldPreset {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::ExtraSmall => FieldPreset::ExtraSmall,
            FieldArg::Small => FieldPreset::Small,
            FieldArg::Medium => FieldPreset::Medium,
            FieldArg::Large => FieldPreset::Large,
        }
    }
}

#[derive(Parser)]
#[command(name = "mongoose_snake", about = "Snake with fruit and mongooses")]
struct Args {
    /// YAML config file, created when the menu settings change
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Seed for fruit and mongoose placement
    #[arg(long)]
    seed: Option<u64>,

    /// Field size; skips the menu and starts playing right away
    #[arg(long, value_enum)]
    field: Option<FieldArg>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every game event
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    let level = if args.debug { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config_or_default();
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(field) = args.field {
        config.game.field_preset = field.into();
    }
    log!("Using config file {}", args.config.display());

    let mut app = SnakeApp::new(config_manager, config);
    if args.field.is_some() {
        app = app.start_immediately();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 640.0])
            .with_title("Mongoose Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Mongoose Snake",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;

    Ok(())
}
