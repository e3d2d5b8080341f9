use rand::{rngs::StdRng, Rng, SeedableRng};

// Row-major cell grid with toroidal edges: coordinates wrap in both axes,
// so callers may pass negative or out-of-range positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    // Every cell independently alive with probability 0.5. Same seed, same grid.
    pub(crate) fn random(seed: u64, width: usize, height: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = (0..width * height).map(|_| rng.gen_bool(0.5)).collect();
        Self::from_cells(width, height, cells)
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn is_alive(&self, x: i32, y: i32) -> bool {
        let x = x.rem_euclid(self.width as i32) as usize;
        let y = y.rem_euclid(self.height as i32) as usize;
        self.cells[y * self.width + x]
    }

    // Live cells among the 8 Moore neighbours, wrapped across edges.
    pub(crate) fn count_neighbours(&self, x: i32, y: i32) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.is_alive(x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }

    pub(crate) fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
