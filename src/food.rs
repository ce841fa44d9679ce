use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Cell, Snake};

/// Picks a uniformly random cell that `snake` does not occupy.
///
/// Samples `x` and `y` independently and resamples on a hit. Returns `None`
/// when the snake covers the whole grid, where sampling could never finish.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Cell> {
    if snake.len() >= bounds.total_cells() {
        return None;
    }

    loop {
        let candidate = Cell {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if !snake.occupies(candidate) {
            log::debug!("food placed at {candidate}");
            return Some(candidate);
        }
    }
}
