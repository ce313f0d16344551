use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_inside(&self, field_size: i32) -> bool {
        (0..field_size).contains(&self.x) && (0..field_size).contains(&self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The neighbouring cell of `point` in this direction. Not clamped to the field.
    pub fn step(self, point: Point) -> Point {
        match self {
            Direction::Up => Point::new(point.x, point.y - 1),
            Direction::Down => Point::new(point.x, point.y + 1),
            Direction::Left => Point::new(point.x - 1, point.y),
            Direction::Right => Point::new(point.x + 1, point.y),
        }
    }
}

pub const FRUIT_KINDS: u8 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fruit {
    /// Sprite variant in `0..FRUIT_KINDS`; has no effect on the rules.
    pub kind: u8,
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Lost,
    /// No free cell was left for a new fruit.
    Won,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldPreset {
    ExtraSmall,
    #[default]
    Small,
    Medium,
    Large,
}

impl FieldPreset {
    pub const ALL: [FieldPreset; 4] = [
        FieldPreset::ExtraSmall,
        FieldPreset::Small,
        FieldPreset::Medium,
        FieldPreset::Large,
    ];

    pub fn field_size(self) -> u32 {
        match self {
            FieldPreset::ExtraSmall => 10,
            FieldPreset::Small => 15,
            FieldPreset::Medium => 20,
            FieldPreset::Large => 25,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldPreset::ExtraSmall => "Extra small",
            FieldPreset::Small => "Small",
            FieldPreset::Medium => "Medium",
            FieldPreset::Large => "Large",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.reverse(), direction);
            assert_eq!(direction.reverse().reverse(), direction);
        }
    }

    #[test]
    fn test_step_then_reverse_step_returns_to_start() {
        let start = Point::new(4, 7);
        for direction in Direction::ALL {
            assert_eq!(direction.reverse().step(direction.step(start)), start);
        }
    }

    #[test]
    fn test_step_uses_screen_coordinates() {
        let origin = Point::new(0, 0);

        assert_eq!(Direction::Up.step(origin), Point::new(0, -1));
        assert_eq!(Direction::Down.step(origin), Point::new(0, 1));
        assert_eq!(Direction::Left.step(origin), Point::new(-1, 0));
        assert_eq!(Direction::Right.step(origin), Point::new(1, 0));
    }

    #[test]
    fn test_is_inside_bounds() {
        assert!(Point::new(0, 0).is_inside(10));
        assert!(Point::new(9, 9).is_inside(10));
        assert!(!Point::new(10, 0).is_inside(10));
        assert!(!Point::new(0, -1).is_inside(10));
    }

    #[test]
    fn test_preset_field_sizes() {
        let sizes: Vec<u32> = FieldPreset::ALL.iter().map(|p| p.field_size()).collect();

        assert_eq!(sizes, vec![10, 15, 20, 25]);
    }
}
