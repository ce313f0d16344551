use crate::games::SessionRng;
use super::types::Point;

pub const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Picks a uniformly random cell accepted by `is_free`.
///
/// Random sampling is tried first; once it has failed `MAX_RANDOM_ATTEMPTS`
/// times every free cell is collected and one of them is drawn, so the call
/// terminates on a crowded field. `None` means no cell is free.
pub fn find_free_cell(
    rng: &mut SessionRng,
    field_size: i32,
    is_free: impl Fn(Point) -> bool,
) -> Option<Point> {
    if field_size <= 0 {
        return None;
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let x = rng.random_range(0..field_size);
        let y = rng.random_range(0..field_size);
        let candidate = Point::new(x, y);

        if is_free(candidate) {
            return Some(candidate);
        }
    }

    let free_cells: Vec<Point> = (0..field_size)
        .flat_map(|y| (0..field_size).map(move |x| Point::new(x, y)))
        .filter(|&cell| is_free(cell))
        .collect();

    if free_cells.is_empty() {
        return None;
    }
    Some(free_cells[rng.random_range(0..free_cells.len())])
}
