use std::collections::VecDeque;
use std::sync::Arc;

use crate::debug;
use crate::games::SessionRng;
use super::placement::find_free_cell;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Direction, FRUIT_KINDS, Fruit, GameStatus, Point};

const INITIAL_TAIL: [Direction; 2] = [Direction::Up, Direction::Up];
const INITIAL_DIRECTION: Direction = Direction::Down;

/// A new mongoose appears whenever the tail is more than this many times
/// longer than the mongoose list.
const TAIL_PER_MONGOOSE: usize = 5;

/// Single-player simulation: one snake, one fruit, a growing list of
/// mongoose obstacles. Driven by [`Gameplay::set_direction`] between ticks
/// and [`Gameplay::step`] once per tick.
#[derive(Clone, Debug)]
pub struct Gameplay {
    settings: Arc<GameSettings>,
    rng: SessionRng,
    snake: Snake,
    direction: Direction,
    fruit: Option<Fruit>,
    mongoose: Vec<Point>,
    status: GameStatus,
    ticks: u64,
}

impl Gameplay {
    pub fn new(settings: Arc<GameSettings>, rng: SessionRng) -> Self {
        let mut gameplay = Self {
            settings,
            rng,
            snake: Snake::new(Point::new(0, 0), []),
            direction: INITIAL_DIRECTION,
            fruit: None,
            mongoose: Vec::new(),
            status: GameStatus::Running,
            ticks: 0,
        };
        gameplay.reset_game();
        gameplay
    }

    /// Starts over in the top-left corner heading down, keeping the settings
    /// and continuing the random sequence.
    pub fn reset_game(&mut self) {
        let start = Point::new(0, INITIAL_TAIL.len() as i32);
        self.snake = Snake::new(start, INITIAL_TAIL);
        self.direction = INITIAL_DIRECTION;
        self.fruit = None;
        self.mongoose.clear();
        self.status = GameStatus::Running;
        self.ticks = 0;

        debug!(
            "New game on a {0}x{0} field (seed {1})",
            self.settings.field_size,
            self.rng.seed()
        );

        self.set_fruit();
        self.set_mongoose();
    }

    /// Requests a turn for the next tick. Turning onto the neck is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.snake.neck_direction() == Some(direction) {
            return;
        }
        self.direction = direction;
    }

    /// Advances one tick. Returns `false` when the move collided (the state is
    /// left exactly as it was and the game is lost) or the game is over.
    pub fn step(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        let mut next = self.snake.clone();
        let grew = next.advance(self.direction);
        let head = next.head();

        if !self.is_free_for(&next, head) {
            debug!("Collision at ({}, {}) after {} ticks", head.x, head.y, self.ticks);
            self.status = GameStatus::Lost;
            return false;
        }

        self.snake = next;
        self.ticks += 1;

        if grew {
            debug!("Snake grew to {} segments", self.snake.tail().len() + 1);
        }

        if self.fruit.is_some_and(|fruit| fruit.position == head) {
            debug!("Fruit eaten at ({}, {})", head.x, head.y);
            self.snake.swallow();
            self.set_fruit();
        }

        if self.snake.tail().len() > TAIL_PER_MONGOOSE * self.mongoose.len() {
            self.set_mongoose();
        }

        true
    }

    /// Whether `point` is inside the field and clear of mongoose and tail.
    /// The head cell itself is not considered.
    pub fn is_free(&self, point: Point) -> bool {
        self.is_free_for(&self.snake, point)
    }

    fn is_free_for(&self, snake: &Snake, point: Point) -> bool {
        cell_is_free(self.field_size(), &self.mongoose, snake, point)
    }

    fn set_fruit(&mut self) {
        let kind = self.rng.random_range(0..FRUIT_KINDS);
        let field_size = self.field_size();
        let (snake, mongoose) = (&self.snake, &self.mongoose);
        let head = snake.head();

        let position = find_free_cell(&mut self.rng, field_size, |cell| {
            cell != head && cell_is_free(field_size, mongoose, snake, cell)
        });

        match position {
            Some(position) => {
                self.fruit = Some(Fruit { kind, position });
            }
            None => {
                debug!("No free cell left for a fruit, the field is full");
                self.fruit = None;
                self.status = GameStatus::Won;
            }
        }
    }

    fn set_mongoose(&mut self) {
        let field_size = self.field_size();
        let (snake, mongoose) = (&self.snake, &self.mongoose);
        let head = snake.head();
        let fruit = self.fruit.map(|fruit| fruit.position);

        let position = find_free_cell(&mut self.rng, field_size, |cell| {
            cell != head
                && Some(cell) != fruit
                && cell_is_free(field_size, mongoose, snake, cell)
        });

        match position {
            Some(position) => {
                debug!("Mongoose #{} at ({}, {})", self.mongoose.len() + 1, position.x, position.y);
                self.mongoose.push(position);
            }
            None => debug!("No free cell left for a mongoose"),
        }
    }

    fn field_size(&self) -> i32 {
        self.settings.field_size as i32
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn head(&self) -> Point {
        self.snake.head()
    }

    pub fn tail(&self) -> &VecDeque<Direction> {
        self.snake.tail()
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.snake.segments()
    }

    pub fn eaten_fruits(&self) -> &[i32] {
        self.snake.eaten_fruits()
    }

    pub fn carries_fruit(&self, segment_index: usize) -> bool {
        self.snake.carries_fruit(segment_index)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn fruit(&self) -> Option<&Fruit> {
        self.fruit.as_ref()
    }

    pub fn mongoose(&self) -> &[Point] {
        &self.mongoose
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::Lost
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

fn cell_is_free(field_size: i32, mongoose: &[Point], snake: &Snake, point: Point) -> bool {
    point.is_inside(field_size) && !mongoose.contains(&point) && !snake.tail_contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use Direction::*;

    fn settings(field_size: u32) -> Arc<GameSettings> {
        Arc::new(GameSettings {
            field_size,
            ..GameSettings::default()
        })
    }

    fn create_test_game(field_size: u32) -> Gameplay {
        Gameplay::new(settings(field_size), SessionRng::new(12345))
    }

    /// A game with a hand-placed snake, a far-away fruit and one mongoose.
    fn game_with_snake(head: Point, tail: &[Direction], direction: Direction) -> Gameplay {
        game_with_snake_on(10, head, tail, direction)
    }

    fn game_with_snake_on(
        field_size: u32,
        head: Point,
        tail: &[Direction],
        direction: Direction,
    ) -> Gameplay {
        let mut game = create_test_game(field_size);
        game.snake = Snake::new(head, tail.iter().copied());
        game.direction = direction;
        game.fruit = Some(Fruit { kind: 0, position: Point::new(9, 9) });
        game.mongoose = vec![Point::new(9, 0)];
        game
    }

    fn occupied_cells(game: &Gameplay) -> Vec<Point> {
        std::iter::once(game.head())
            .chain(game.segments())
            .chain(game.mongoose().iter().copied())
            .collect()
    }

    #[test]
    fn test_reset_places_snake_in_top_left_corner() {
        let game = create_test_game(10);

        assert_eq!(game.head(), Point::new(0, 2));
        assert_eq!(game.tail(), &VecDeque::from([Up, Up]));
        assert_eq!(game.direction(), Down);
        assert_eq!(
            game.segments().collect::<Vec<_>>(),
            vec![Point::new(0, 1), Point::new(0, 0)]
        );
        assert_eq!(game.status(), GameStatus::Running);
        assert!(game.eaten_fruits().is_empty());
    }

    #[test]
    fn test_reset_places_fruit_and_one_mongoose_on_free_cells() {
        let game = create_test_game(10);
        let fruit = game.fruit().unwrap();

        assert_eq!(game.mongoose().len(), 1);
        assert!(fruit.kind < FRUIT_KINDS);
        assert!(game.is_free(fruit.position));
        assert_ne!(fruit.position, game.head());
        assert_ne!(fruit.position, game.mongoose()[0]);
        assert_ne!(game.mongoose()[0], game.head());
        assert!(game.segments().all(|segment| !game.mongoose().contains(&segment)));
    }

    #[test]
    fn test_reset_game_restarts_after_a_loss() {
        let mut game = game_with_snake(Point::new(0, 5), &[Right, Right], Left);
        assert!(!game.step());

        game.reset_game();

        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.head(), Point::new(0, 2));
        assert_eq!(game.mongoose().len(), 1);
        assert_eq!(game.ticks(), 0);
        assert!(game.eaten_fruits().is_empty());
    }

    #[test]
    fn test_step_down_from_origin() {
        let mut game = game_with_snake(Point::new(0, 0), &[Up, Up], Down);

        assert!(game.step());

        assert_eq!(game.head(), Point::new(0, 1));
        assert_eq!(game.tail(), &VecDeque::from([Up, Up]));
        assert_eq!(game.tail()[0], game.direction().reverse());
    }

    #[test]
    fn test_turn_takes_effect_on_next_step() {
        let mut game = game_with_snake(Point::new(5, 5), &[Left, Left], Right);

        game.set_direction(Down);
        assert_eq!(game.head(), Point::new(5, 5));
        assert!(game.step());

        assert_eq!(game.head(), Point::new(5, 6));
        assert_eq!(game.tail(), &VecDeque::from([Up, Left]));
        assert_eq!(
            game.segments().collect::<Vec<_>>(),
            vec![Point::new(5, 5), Point::new(4, 5)]
        );
    }

    #[test]
    fn test_turning_onto_the_neck_is_ignored() {
        let mut game = game_with_snake(Point::new(5, 5), &[Up, Up], Down);

        game.set_direction(Up);

        assert_eq!(game.direction(), Down);
    }

    #[test]
    fn test_side_turns_are_accepted() {
        let mut game = game_with_snake(Point::new(5, 5), &[Up, Up], Down);

        game.set_direction(Left);
        assert_eq!(game.direction(), Left);

        game.set_direction(Right);
        assert_eq!(game.direction(), Right);
    }

    #[test]
    fn test_two_quick_turns_cannot_reverse_the_snake() {
        let mut game = game_with_snake(Point::new(5, 5), &[Left, Left], Right);

        game.set_direction(Up);
        game.set_direction(Left);

        assert_eq!(game.direction(), Up);
    }

    #[test]
    fn test_wall_collision_loses_and_keeps_state() {
        let mut game = game_with_snake(Point::new(0, 5), &[Right, Right], Left);
        let tail_before = game.tail().clone();

        assert!(!game.step());

        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.is_game_over());
        assert_eq!(game.head(), Point::new(0, 5));
        assert_eq!(game.tail(), &tail_before);
    }

    #[test]
    fn test_bottom_and_right_walls() {
        let mut down = game_with_snake(Point::new(4, 9), &[Up, Up], Down);
        let mut right = game_with_snake(Point::new(9, 4), &[Left, Left], Right);

        assert!(!down.step());
        assert!(!right.step());
    }

    #[test]
    fn test_self_collision_rolls_back_everything() {
        let mut game = game_with_snake(Point::new(5, 5), &[Down, Right, Up, Up], Right);
        game.snake.swallow();
        game.snake.swallow();
        let snake_before = game.snake.clone();

        assert!(!game.step());

        assert_eq!(game.head(), Point::new(5, 5));
        assert_eq!(game.snake, snake_before);
        assert_eq!(game.eaten_fruits(), &[-1, -1]);
        assert_eq!(game.ticks(), 0);
    }

    #[test]
    fn test_following_the_tail_end_is_allowed() {
        let mut game = game_with_snake(Point::new(5, 5), &[Down, Right, Up], Right);

        assert!(game.step());

        assert_eq!(game.head(), Point::new(6, 5));
    }

    #[test]
    fn test_mongoose_collision_loses() {
        let mut game = game_with_snake(Point::new(3, 3), &[Left, Left], Right);
        game.mongoose = vec![Point::new(4, 3)];

        assert!(!game.step());

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.head(), Point::new(3, 3));
    }

    #[test]
    fn test_lost_game_does_not_step() {
        let mut game = game_with_snake(Point::new(0, 5), &[Right, Right], Left);
        assert!(!game.step());

        game.set_direction(Down);

        assert!(!game.step());
        assert_eq!(game.head(), Point::new(0, 5));
    }

    #[test]
    fn test_eating_relocates_the_fruit() {
        let mut game = game_with_snake(Point::new(2, 5), &[Left, Left], Right);
        game.fruit = Some(Fruit { kind: 3, position: Point::new(3, 5) });

        assert!(game.step());

        assert_eq!(game.eaten_fruits(), &[-1]);
        let fruit = game.fruit().unwrap();
        assert_ne!(fruit.position, Point::new(3, 5));
        assert!(game.is_free(fruit.position));
        assert_ne!(fruit.position, game.head());
    }

    fn ticks_until_growth(tail_len: usize) -> usize {
        let tail = vec![Left; tail_len];
        let mut game = game_with_snake_on(20, Point::new(tail_len as i32, 5), &tail, Right);
        game.mongoose = vec![Point::new(9, 0), Point::new(0, 9)];
        game.fruit = Some(Fruit { kind: 0, position: Point::new(tail_len as i32 + 1, 5) });

        assert!(game.step());
        assert_eq!(game.eaten_fruits(), &[-1]);
        game.fruit = Some(Fruit { kind: 0, position: Point::new(0, 0) });

        let mut ticks = 0;
        while game.tail().len() == tail_len {
            assert!(game.step());
            ticks += 1;
            if game.tail().len() == tail_len {
                assert!(game.carries_fruit(ticks - 1));
            }
        }

        assert_eq!(game.tail().len(), tail_len + 1);
        assert!(game.eaten_fruits().is_empty());
        ticks
    }

    #[test]
    fn test_growth_happens_once_the_fruit_passed_the_whole_tail() {
        assert_eq!(ticks_until_growth(2), 3);
        assert_eq!(ticks_until_growth(3), 4);
    }

    #[test]
    fn test_growth_waits_for_each_segment() {
        for tail_len in [1, 4] {
            assert_eq!(ticks_until_growth(tail_len), tail_len + 1);
        }
    }

    #[test]
    fn test_mongoose_added_when_tail_outgrows_ratio() {
        let mut game = game_with_snake(Point::new(6, 5), &[Left; 6], Right);

        assert!(game.step());

        assert_eq!(game.mongoose().len(), 2);
    }

    #[test]
    fn test_no_mongoose_at_exact_ratio() {
        let mut game = game_with_snake(Point::new(5, 5), &[Left; 5], Right);

        assert!(game.step());

        assert_eq!(game.mongoose().len(), 1);
    }

    #[test]
    fn test_ratio_uses_current_mongoose_count() {
        let mut game = game_with_snake_on(20, Point::new(6, 5), &[Left; 6], Right);
        game.mongoose = vec![Point::new(19, 0), Point::new(0, 19)];

        assert!(game.step());
        assert_eq!(game.mongoose().len(), 2);

        let mut game = game_with_snake_on(20, Point::new(11, 5), &[Left; 11], Right);
        game.mongoose = vec![Point::new(19, 0), Point::new(0, 19)];

        assert!(game.step());
        assert_eq!(game.mongoose().len(), 3);
    }

    /// 3x3 field where the snake covers every cell except (2, 2).
    fn game_with_one_free_cell(seed: u64) -> Gameplay {
        let mut game = Gameplay::new(settings(3), SessionRng::new(seed));
        game.snake = Snake::new(
            Point::new(0, 0),
            [Right, Right, Down, Left, Left, Down, Right],
        );
        game.mongoose.clear();
        game.fruit = None;
        game.status = GameStatus::Running;
        game
    }

    #[test]
    fn test_fruit_lands_on_the_last_free_cell() {
        for seed in 0..10 {
            let mut game = game_with_one_free_cell(seed);

            game.set_fruit();

            assert_eq!(game.fruit().map(|f| f.position), Some(Point::new(2, 2)));
            assert_eq!(game.status(), GameStatus::Running);
        }
    }

    #[test]
    fn test_mongoose_skipped_when_only_the_fruit_cell_is_free() {
        let mut game = game_with_one_free_cell(1);
        game.set_fruit();

        game.set_mongoose();

        assert!(game.mongoose().is_empty());
    }

    #[test]
    fn test_full_field_wins() {
        let mut game = game_with_one_free_cell(2);
        game.mongoose = vec![Point::new(2, 2)];

        game.set_fruit();

        assert_eq!(game.tail().len() + 2, game.settings().cell_count());
        assert!(game.fruit().is_none());
        assert_eq!(game.status(), GameStatus::Won);
        assert!(!game.step());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = create_test_game(20);
        let b = create_test_game(20);

        assert_eq!(a.fruit(), b.fruit());
        assert_eq!(a.mongoose(), b.mongoose());
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut game = create_test_game(10);
        let mut moves = SessionRng::new(777);

        for _ in 0..3000 {
            let index = moves.random_range(0..Direction::ALL.len());
            game.set_direction(Direction::ALL[index]);

            if !game.step() {
                game.reset_game();
                continue;
            }

            let cells = occupied_cells(&game);
            assert!(cells.iter().all(|cell| cell.is_inside(10)));
            let unique: HashSet<Point> = cells.iter().copied().collect();
            assert_eq!(unique.len(), cells.len());

            if let Some(fruit) = game.fruit() {
                assert!(!cells.contains(&fruit.position));
            }
        }
    }
}
