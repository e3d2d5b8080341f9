use crate::config::{MAX_TPS, MIN_TPS, NOISE_DIVISOR};
use crate::grid::Grid;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

// Seeding policy for the per-tick noise sprinkle. `Fixed` reseeds with the
// same value every tick, so the same cells are re-marked forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum NoisePolicy {
    Off,
    Fixed(u64),
    PerTick,
}

pub(crate) struct Simulation {
    grid: Grid,
    // Neighbour counts that produced the current generation, for the overlay.
    counts: Vec<u8>,
    generation: u64,
    run_count: u32,
    population: usize,
    show_counts: bool,
    ticks_per_second: u32,
    seed: u64,
    noise: NoisePolicy,
}

impl Simulation {
    pub(crate) fn new(show_counts: bool, ticks_per_second: u32, noise: NoisePolicy) -> Self {
        Self {
            grid: Grid::from_cells(1, 1, vec![false]),
            counts: vec![0],
            generation: 0,
            run_count: 0,
            population: 0,
            show_counts,
            ticks_per_second: ticks_per_second.clamp(MIN_TPS, MAX_TPS),
            seed: 0,
            noise,
        }
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn run_count(&self) -> u32 {
        self.run_count
    }

    pub(crate) fn population(&self) -> usize {
        self.population
    }

    pub(crate) fn show_counts(&self) -> bool {
        self.show_counts
    }

    pub(crate) fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    pub(crate) fn neighbour_count(&self, x: usize, y: usize) -> u8 {
        self.counts[y * self.grid.width() + x]
    }

    pub(crate) fn toggle_counts(&mut self) {
        self.show_counts = !self.show_counts;
    }

    pub(crate) fn speed_up(&mut self) {
        if self.ticks_per_second < MAX_TPS {
            self.ticks_per_second += 1;
        }
    }

    pub(crate) fn slow_down(&mut self) {
        if self.ticks_per_second > MIN_TPS {
            self.ticks_per_second -= 1;
        }
    }

    // One synchronous generation step. Every rule read sees the pre-tick
    // grid; the next generation is built in a separate buffer and swapped
    // in wholesale after the noise sprinkle.
    pub(crate) fn tick(&mut self) {
        let w = self.grid.width();
        let h = self.grid.height();
        let mut next = vec![false; w * h];
        for (i, &alive) in self.grid.cells().iter().enumerate() {
            let x = (i % w) as i32;
            let y = (i / w) as i32;
            let count = self.grid.count_neighbours(x, y);
            next[i] = (alive && (count == 2 || count == 3)) || (!alive && count == 3);
            self.counts[i] = count;
        }

        if let Some(seed) = self.noise_seed() {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..(w * h) / NOISE_DIVISOR {
                next[rng.gen_range(0..w * h)] = true;
            }
        }

        self.generation += 1;
        self.grid = Grid::from_cells(w, h, next);
        self.population = self.grid.population();
    }

    fn noise_seed(&self) -> Option<u64> {
        match self.noise {
            NoisePolicy::Off => None,
            NoisePolicy::Fixed(seed) => Some(seed),
            NoisePolicy::PerTick => Some(
                self.seed
                    .wrapping_add(self.generation.wrapping_mul(0x9E3779B97F4A7C15)),
            ),
        }
    }

    // Begin a fresh epoch: new random grid, generation back to zero. The run
    // counter survives restarts for the whole life of the process.
    pub(crate) fn restart(&mut self, width: usize, height: usize, seed: u64) {
        debug_assert!(width > 0 && height > 0);
        self.grid = Grid::random(seed, width, height);
        self.counts = vec![0; width * height];
        self.generation = 0;
        self.run_count += 1;
        self.population = self.grid.population();
        self.seed = seed;
    }
}
