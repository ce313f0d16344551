use std::sync::Arc;
use std::time::Duration;

use common::{log, Direction, GameSettings, GameStatus, Gameplay, SessionRng};

/// Ticks a frame may run to catch up after a stall (window hidden, debugger).
/// Any lag beyond that is dropped instead of fast-forwarding the snake.
const MAX_CATCH_UP_TICKS: u32 = 3;

/// Local driver for one [`Gameplay`]: turns frame time into fixed-interval
/// ticks and applies player input between them.
pub struct SnakeRunner {
    gameplay: Gameplay,
    tick_interval: Duration,
    accumulated: Duration,
    paused: bool,
}

impl SnakeRunner {
    pub fn new(settings: GameSettings, tick_interval: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        log!(
            "Starting a {0}x{0} game, tick {1} ms, seed {2}",
            settings.field_size,
            tick_interval.as_millis(),
            rng.seed()
        );

        Self {
            gameplay: Gameplay::new(Arc::new(settings), rng),
            tick_interval,
            accumulated: Duration::ZERO,
            paused: false,
        }
    }

    pub fn gameplay(&self) -> &Gameplay {
        &self.gameplay
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn turn(&mut self, direction: Direction) {
        if self.paused {
            return;
        }
        self.gameplay.set_direction(direction);
    }

    pub fn toggle_pause(&mut self) {
        if self.gameplay.status() != GameStatus::Running {
            return;
        }
        self.paused = !self.paused;
        self.accumulated = Duration::ZERO;
    }

    pub fn restart(&mut self) {
        self.gameplay.reset_game();
        self.accumulated = Duration::ZERO;
        self.paused = false;
    }

    /// Feeds elapsed frame time and runs every tick that became due.
    /// Returns the number of ticks that ran.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.paused || self.gameplay.status() != GameStatus::Running {
            return 0;
        }

        self.accumulated += elapsed;
        let mut ticks = 0;

        while self.accumulated >= self.tick_interval {
            if ticks == MAX_CATCH_UP_TICKS {
                self.accumulated = Duration::ZERO;
                break;
            }
            self.accumulated -= self.tick_interval;
            ticks += 1;

            if !self.gameplay.step() {
                self.accumulated = Duration::ZERO;
                self.log_game_end();
                break;
            }
            if self.gameplay.status() == GameStatus::Won {
                self.log_game_end();
                break;
            }
        }

        ticks
    }

    pub fn time_until_next_tick(&self) -> Duration {
        self.tick_interval.saturating_sub(self.accumulated)
    }

    fn log_game_end(&self) {
        log!(
            "Game {:?} after {} ticks with {} segments",
            self.gameplay.status(),
            self.gameplay.ticks(),
            self.gameplay.tail().len() + 1
        );
    }
}
