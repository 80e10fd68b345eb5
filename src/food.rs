use crate::config::GridSize;
use crate::random::RandomSource;
use crate::snake::{Position, Snake};

/// Picks a free cell uniformly, or `None` when the snake fills the grid.
///
/// Free cells are enumerated row by row (y outer, x inner) and one sample
/// from `source` selects among them, so a fixed sample sequence always
/// lands on the same cell.
#[must_use]
pub fn random_cell<R: RandomSource + ?Sized>(
    bounds: GridSize,
    snake: &Snake,
    source: &mut R,
) -> Option<Position> {
    let side = i32::from(bounds.side());
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..side {
        for x in 0..side {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    Some(candidates[pick_index(source.next_unit(), candidates.len())])
}

/// Maps a sample in `[0, 1)` onto `0..len`.
fn pick_index(sample: f64, len: usize) -> usize {
    let scaled = (sample * len as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        return 0;
    }
    (scaled as usize).min(len - 1)
}
