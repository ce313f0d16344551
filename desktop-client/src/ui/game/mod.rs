mod drawer;
mod snake;

pub use snake::{SnakeGameUi, SnakeUiAction};
