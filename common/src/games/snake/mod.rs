mod gameplay;
mod placement;
mod settings;
mod snake;
mod types;

pub use gameplay::Gameplay;
pub use placement::{MAX_RANDOM_ATTEMPTS, find_free_cell};
pub use settings::{BORDER_THICKNESS, CELL_LENGTH, GameSettings};
pub use snake::Snake;
pub use types::{Direction, FRUIT_KINDS, FieldPreset, Fruit, GameStatus, Point};
