use rand::Rng;

use crate::config::GRID_SIZE;
use crate::snake::{Position, Snake};

/// Returns true when the position lies inside the fixed game grid.
#[must_use]
pub fn is_in_bounds(position: Position) -> bool {
    position.x >= 0
        && position.y >= 0
        && position.x < i32::from(GRID_SIZE)
        && position.y < i32::from(GRID_SIZE)
}

/// Picks a food cell uniformly at random from the cells the snake does not
/// occupy.
///
/// Builds the free-cell list up front and picks by index, so the cost is one
/// grid scan regardless of occupancy. Returns `None` when the snake covers
/// the whole grid and no cell is left.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Option<Position> {
    let mut free_cells = Vec::with_capacity(usize::from(GRID_SIZE) * usize::from(GRID_SIZE));

    for y in 0..i32::from(GRID_SIZE) {
        for x in 0..i32::from(GRID_SIZE) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                free_cells.push(position);
            }
        }
    }

    if free_cells.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..free_cells.len());
    Some(free_cells[index])
}
