use crate::Grid;

/// A named starting shape, given as `(row, col)` offsets from its top-left
/// corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// Case-insensitive lookup in [`PATTERNS`].
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        let w = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        let h = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        (w, h)
    }

    /// Set the pattern's cells alive with its top-left corner at `(x, y)`.
    /// Cells past an edge wrap to the opposite side.
    pub fn stamp(&self, grid: &mut Grid, x: usize, y: usize) {
        let (w, h) = (grid.width(), grid.height());
        for &(row, col) in self.cells {
            grid.set((x + col) % w, (y + row) % h, true);
        }
    }

    /// A dead `width` x `height` grid with the pattern stamped in the middle.
    pub fn centered(&self, width: usize, height: usize) -> Grid {
        let mut grid = Grid::dead(width, height);
        let (pw, ph) = self.size();
        self.stamp(&mut grid, width.saturating_sub(pw) / 2, height.saturating_sub(ph) / 2);
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(grid: &Grid, max: usize) -> Option<usize> {
        let mut g = grid.next_generation();
        for n in 1..=max {
            if &g == grid {
                return Some(n);
            }
            g = g.next_generation();
        }
        None
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Pattern::by_name("pulsar").map(|p| p.name), Some("Pulsar"));
        assert!(Pattern::by_name("spaceship").is_none());
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in &PATTERNS[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name));
            }
        }
    }

    #[test]
    fn oscillator_periods() {
        let blinker = Pattern::by_name("Blinker").unwrap().centered(9, 9);
        let toad = Pattern::by_name("Toad").unwrap().centered(10, 10);
        let beacon = Pattern::by_name("Beacon").unwrap().centered(10, 10);
        let pulsar = Pattern::by_name("Pulsar").unwrap().centered(25, 25);
        assert_eq!(period(&blinker, 10), Some(2));
        assert_eq!(period(&toad, 10), Some(2));
        assert_eq!(period(&beacon, 10), Some(2));
        assert_eq!(period(&pulsar, 10), Some(3));
    }

    #[test]
    fn gun_size_matches_catalogue() {
        let gun = Pattern::by_name("Gosper Glider Gun").unwrap();
        assert_eq!(gun.size(), (36, 9));
        assert_eq!(gun.cells.len(), 36);
    }

    #[test]
    fn stamp_wraps_around_edges() {
        let mut grid = Grid::dead(5, 5);
        Pattern::by_name("Blinker").unwrap().stamp(&mut grid, 4, 4);
        assert!(grid.get(4, 4) && grid.get(0, 4) && grid.get(1, 4));
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn centered_on_grid_smaller_than_pattern_still_fits_cells() {
        let grid = Pattern::by_name("Pulsar").unwrap().centered(5, 5);
        // Overlapping wrapped cells collapse, but nothing panics.
        assert!(grid.live_count() > 0);
    }
}
