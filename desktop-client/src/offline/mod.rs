mod snake_runner;

pub use snake_runner::SnakeRunner;
