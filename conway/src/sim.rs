// sim.rs - Simulation context: current generation, counters and cycle detection

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{Config, Seeding};
use crate::Grid;

const HISTORY_LEN: usize = 10;

/// Immutable snapshot handed to renderers.
#[derive(Debug, Clone)]
pub struct Frame {
    pub grid: Arc<Grid>,
    pub generation: u64,
    /// The board has repeated one of the last few generations.
    pub settled: bool,
}

/// Owns the current generation and replaces it wholesale on every step.
pub struct Simulation {
    grid: Arc<Grid>,
    seeding: Seeding,
    generation: u64,
    settled: bool,
    history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Simulation {
    pub fn new(grid: Grid, seeding: Seeding) -> Self {
        let mut sim = Self {
            grid: Arc::new(grid),
            seeding,
            generation: 0,
            settled: false,
            history: [0; HISTORY_LEN],
            history_count: 0,
        };
        sim.remember();
        sim
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.initial_grid(), config.seeding)
    }

    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn frame(&self) -> Frame {
        Frame {
            grid: Arc::clone(&self.grid),
            generation: self.generation,
            settled: self.settled,
        }
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        self.grid = Arc::new(self.grid.next_generation());
        self.generation += 1;
        debug!(generation = self.generation, live = self.grid.live_count(), "step");

        if self.check_for_cycle() && !self.settled {
            self.settled = true;
            info!(generation = self.generation, "board settled into a cycle");
        }
    }

    /// Throw away all state and start again on a `width` x `height` board.
    pub fn reset(&mut self, width: usize, height: usize) {
        info!(width, height, "reinitialising grid");
        self.grid = Arc::new(self.seeding.build(width, height));
        self.generation = 0;
        self.settled = false;
        self.history = [0; HISTORY_LEN];
        self.history_count = 0;
        self.remember();
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current = self.hash_grid();
        let seen = self.history[..self.history_count.min(HISTORY_LEN)].contains(&current);
        self.push_history(current);
        seen
    }

    fn remember(&mut self) {
        let current = self.hash_grid();
        self.push_history(current);
    }

    fn push_history(&mut self, hash: u64) {
        self.history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
    }
}
