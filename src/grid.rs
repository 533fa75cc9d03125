use crate::pos::Pos2;
use rand::Rng;

/// A fixed-size dense grid of cell states, row-major.
///
/// Dimensions are set at construction and never change. Wholesale updates
/// (advancing a generation, toggling a cell) produce a new `Grid`, so the
/// previous generation stays readable while the next one is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn empty(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_| false)
    }

    /// Creates a grid by evaluating `f` for every cell position.
    pub fn from_fn<F: FnMut(Pos2) -> bool>(width: i32, height: i32, mut f: F) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(Pos2::new(x, y)));
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// Creates a grid where each cell is independently alive with
    /// probability `alive_probability` (in `[0, 1]`).
    pub fn random<R: Rng>(width: i32, height: i32, alive_probability: f64, rng: &mut R) -> Self {
        Self::from_fn(width, height, |_| rng.random_bool(alive_probability))
    }

    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            cells,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `pos` is within the grid bounds.
    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    fn index(&self, pos: Pos2) -> usize {
        assert!(
            self.contains(pos),
            "cell ({}, {}) out of bounds for {}x{} grid",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// The state of the cell at `pos`. Panics if `pos` is out of bounds.
    #[inline]
    pub fn get(&self, pos: Pos2) -> bool {
        self.cells[self.index(pos)]
    }

    /// Returns a copy of this grid with the cell at `pos` flipped.
    /// Panics if `pos` is out of bounds.
    pub fn toggled(&self, pos: Pos2) -> Self {
        let idx = self.index(pos);
        let mut next = self.clone();
        next.cells[idx] = !next.cells[idx];
        next
    }

    /// The number of live cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_all_dead() {
        let grid = Grid::empty(5, 4);

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn from_fn_addresses_row_major() {
        let grid = Grid::from_fn(3, 2, |pos| pos == Pos2::new(2, 1));

        assert!(grid.get(Pos2::new(2, 1)));
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn toggled_flips_only_the_target() {
        let grid = Grid::empty(4, 4);
        let toggled = grid.toggled(Pos2::new(1, 2));

        assert!(toggled.get(Pos2::new(1, 2)));
        assert_eq!(toggled.alive_count(), 1);
        // the input grid is untouched
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn toggled_is_self_inverse() {
        let mut rng = rand::rng();
        let grid = Grid::random(6, 6, 0.5, &mut rng);
        let pos = Pos2::new(3, 4);

        assert_eq!(grid.toggled(pos).toggled(pos), grid);
    }

    #[test]
    fn random_probability_zero_is_all_dead() {
        let grid = Grid::random(10, 10, 0.0, &mut rand::rng());

        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn random_probability_one_is_all_alive() {
        let grid = Grid::random(10, 10, 1.0, &mut rand::rng());

        assert_eq!(grid.alive_count(), 100);
    }

    #[test]
    fn contains_matches_bounds() {
        let grid = Grid::empty(3, 3);

        assert!(grid.contains(Pos2::new(0, 0)));
        assert!(grid.contains(Pos2::new(2, 2)));
        assert!(!grid.contains(Pos2::new(-1, 0)));
        assert!(!grid.contains(Pos2::new(0, 3)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_panics() {
        Grid::empty(3, 3).get(Pos2::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn toggled_out_of_bounds_panics() {
        Grid::empty(3, 3).toggled(Pos2::new(0, -1));
    }
}
