// grid.rs - Toroidal grid and the B3/S23 generation transition

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::GridError;

/// One generation of a Game of Life board.
///
/// Cells are stored row-major in a single buffer of `width * height`
/// entries, so every row always holds exactly `width` cells. Edges wrap:
/// column `width - 1` neighbours column `0`, and the last row neighbours
/// the first.
///
/// A `Grid` is never advanced in place. [`Grid::next_generation`] borrows
/// the current board and returns a new one, so a reader holding the old
/// generation is never disturbed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn dead(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a grid from explicit rows (outer index = y).
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(GridError::Ragged { row, len: r.len(), expected });
            }
            cells.extend_from_slice(r);
        }

        Ok(Self {
            width: expected,
            height: rows.len(),
            cells,
        })
    }

    /// Parse a text picture of a grid, one line per row. Cells equal to
    /// `alive` are live, every other character is dead. Surrounding
    /// whitespace on each line is ignored and blank lines are skipped.
    pub fn parse(text: &str, alive: char) -> Result<Self, GridError> {
        let rows: Vec<Vec<bool>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| c == alive).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Fill a grid by drawing one uniform sample in `[0, 1)` per cell and
    /// marking the cell alive when the sample is `< density`.
    ///
    /// A density of `0.0` therefore yields an empty grid and `1.0` a full
    /// one. Cells are sampled row by row.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, density: f64, rng: &mut R) -> Self {
        let mut grid = Self::dead(width, height);
        for cell in grid.cells.iter_mut() {
            *cell = rng.r#gen::<f64>() < density;
        }
        grid
    }

    /// Randomly initialise a grid. With a seed the result is reproducible;
    /// without one the generator is seeded from OS entropy.
    pub fn initialize(width: usize, height: usize, density: f64, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::random(width, height, density, &mut rng)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell state at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.index(x, y);
        self.cells[i] = alive;
    }

    /// Rows from top to bottom, each exactly `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Coordinates `(x, y)` of every live cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of live cells among the eight wrapped neighbours of `(x, y)`.
    ///
    /// Offsets are wrapped independently and never deduplicated. On a
    /// dimension of length 1 or 2 several offsets land on the same cell
    /// (possibly `(x, y)` itself) and that cell is counted once per
    /// offset, so a lone live cell on a 1x1 grid has 8 neighbours.
    pub fn count_neighbors(&self, x: usize, y: usize) -> usize {
        let (w, h) = (self.width, self.height);
        let mut count = 0;
        // Offsets 0..3 stand for -1..=1 so the arithmetic stays unsigned.
        for dy in 0..3 {
            for dx in 0..3 {
                if dx == 1 && dy == 1 {
                    continue;
                }
                let nx = (x + dx + w - 1) % w;
                let ny = (y + dy + h - 1) % h;
                if self.cells[ny * w + nx] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Compute the following generation into a freshly allocated grid.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid::dead(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.get(x, y);
                next.cells[y * self.width + x] = match (alive, self.count_neighbors(x, y)) {
                    (true, 2) => true, // Survival
                    (_, 3) => true,    // Survival or birth
                    _ => false,
                };
            }
        }
        next
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }
}
