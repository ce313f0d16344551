mod game;
mod menu;
mod sprites;

pub use game::{SnakeGameUi, SnakeUiAction};
pub use menu::MenuUi;
