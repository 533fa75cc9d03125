use crate::grid::Grid;
use crate::pos::Pos2;
use rayon::prelude::*;

/// Relative coordinates of the Moore neighborhood: the 8 cells surrounding
/// a center cell, excluding the center itself.
pub const MOORE_OFFSETS: [Pos2; 8] = [
    Pos2::new(-1, -1),
    Pos2::new(0, -1),
    Pos2::new(1, -1),
    Pos2::new(-1, 0),
    Pos2::new(1, 0),
    Pos2::new(-1, 1),
    Pos2::new(0, 1),
    Pos2::new(1, 1),
];

/// Counts the live Moore neighbors of `pos`.
///
/// Offsets that land outside the grid are excluded from the sum, so border
/// cells simply have fewer neighbors (no wraparound).
pub fn count_live_neighbors(grid: &Grid, pos: Pos2) -> u8 {
    MOORE_OFFSETS
        .iter()
        .map(|&offset| pos + offset)
        .filter(|&neighbor| grid.contains(neighbor) && grid.get(neighbor))
        .count() as u8
}

/// Conway's ruleset: a live cell with 2 neighbors survives, any cell with
/// exactly 3 neighbors is alive next generation, everything else dies.
#[inline]
fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Computes the next generation.
///
/// Every neighbor count is taken against the immutable input grid, and the
/// result is a brand-new grid of the same dimensions. The input is never
/// mutated.
pub fn advance(grid: &Grid) -> Grid {
    Grid::from_fn(grid.width(), grid.height(), |pos| {
        next_state(grid.get(pos), count_live_neighbors(grid, pos))
    })
}

/// Same observable result as [`advance`], with rows computed on the rayon
/// thread pool. Cells only read from the input snapshot, so splitting the
/// pass across threads cannot change the output.
pub fn advance_parallel(grid: &Grid) -> Grid {
    let cells = (0..grid.height())
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..grid.width()).map(move |x| {
                let pos = Pos2::new(x, y);
                next_state(grid.get(pos), count_live_neighbors(grid, pos))
            })
        })
        .collect();
    Grid::from_cells(grid.width(), grid.height(), cells)
}
