use std::collections::VecDeque;

use super::types::{Direction, Point};

/// Head position plus the body as a chain of relative links.
///
/// Link `i` is the step from segment `i - 1` to segment `i`, where segment
/// `-1` is the head, so `tail[0]` points from the head to the neck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    head: Point,
    tail: VecDeque<Direction>,
    /// One counter per swallowed fruit: the index of the tail segment that
    /// currently carries it, starting at `-1` (still in the head).
    eaten_fruits: Vec<i32>,
}

impl Snake {
    pub fn new(head: Point, tail: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            head,
            tail: tail.into_iter().collect(),
            eaten_fruits: Vec::new(),
        }
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn tail(&self) -> &VecDeque<Direction> {
        &self.tail
    }

    pub fn eaten_fruits(&self) -> &[i32] {
        &self.eaten_fruits
    }

    pub fn neck_direction(&self) -> Option<Direction> {
        self.tail.front().copied()
    }

    /// Resolved tail coordinates, neck first.
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.tail.iter().scan(self.head, |position, direction| {
            *position = direction.step(*position);
            Some(*position)
        })
    }

    pub fn tail_contains(&self, point: Point) -> bool {
        self.segments().any(|segment| segment == point)
    }

    pub fn carries_fruit(&self, segment_index: usize) -> bool {
        self.eaten_fruits
            .iter()
            .any(|&counter| usize::try_from(counter).is_ok_and(|index| index == segment_index))
    }

    pub fn swallow(&mut self) {
        self.eaten_fruits.push(-1);
    }

    /// Moves the head one cell and shifts the chain after it. Returns `true`
    /// when a swallowed fruit reached the end of the tail and the snake grew.
    pub fn advance(&mut self, direction: Direction) -> bool {
        self.head = direction.step(self.head);

        for counter in &mut self.eaten_fruits {
            *counter += 1;
        }

        let tail_len = self.tail.len() as i32;
        let grows = match self.eaten_fruits.iter().position(|&counter| counter == tail_len) {
            Some(index) => {
                self.eaten_fruits.remove(index);
                true
            }
            None => false,
        };

        // Growing keeps the last link in place, which is the same as
        // duplicating it and then dropping the oldest one.
        if !grows && self.tail.pop_back().is_none() {
            return false;
        }
        self.tail.push_front(direction.reverse());

        grows
    }
}
