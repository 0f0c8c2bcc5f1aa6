// config.rs - Run configuration shared by the console and window front ends

use std::time::Duration;

use crate::error::ConfigError;
use crate::patterns::Pattern;
use crate::Grid;

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 30;
pub const DEFAULT_DENSITY: f64 = 0.2;
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// How the first generation (and every generation after a reset) is built.
#[derive(Debug, Clone, Copy)]
pub enum Seeding {
    /// Each cell alive with probability `density`.
    Random { density: f64, seed: Option<u64> },
    /// A named pattern centred on an otherwise dead grid.
    Pattern(&'static Pattern),
}

impl Seeding {
    /// Pick a seeding from command-line style options. A pattern name wins
    /// over the random parameters.
    pub fn from_options(density: f64, seed: Option<u64>, pattern: Option<&str>) -> Result<Self, ConfigError> {
        match pattern {
            Some(name) => Pattern::by_name(name)
                .map(Seeding::Pattern)
                .ok_or_else(|| ConfigError::UnknownPattern(name.to_string())),
            None => Ok(Seeding::Random { density, seed }),
        }
    }

    pub fn build(&self, width: usize, height: usize) -> Grid {
        match *self {
            Seeding::Random { density, seed } => Grid::initialize(width, height, density, seed),
            Seeding::Pattern(pattern) => pattern.centered(width, height),
        }
    }
}

impl Default for Seeding {
    fn default() -> Self {
        Seeding::Random { density: DEFAULT_DENSITY, seed: None }
    }
}

/// Grid dimensions, tick interval and seeding for one run.
///
/// Fixed for the lifetime of a run, except that a window front end may
/// replace `width` and `height` when its viewport changes size.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub tick: Duration,
    pub seeding: Seeding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick: DEFAULT_TICK,
            seeding: Seeding::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        if let Seeding::Random { density, .. } = self.seeding {
            // NaN fails the range check as well
            if !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::Density(density));
            }
        }
        Ok(())
    }

    /// The first generation for this configuration.
    pub fn initial_grid(&self) -> Grid {
        self.seeding.build(self.width, self.height)
    }
}
