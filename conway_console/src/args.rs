use std::time::Duration;

use clap::Parser;
use conway::config::{DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use conway::{Config, ConfigError, Seeding};

/// Conway's Game of Life animated in the terminal.
///
/// Every flag is optional; without any the run uses a 50x30 board, 20%
/// starting density and a 100 ms tick. Press Ctrl-C to stop.
#[derive(Parser, Debug)]
#[command(name = "conway-console", version)]
pub struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Probability that a cell starts alive
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Delay between generations in milliseconds
    #[arg(short, long = "tick-ms", default_value_t = 100)]
    pub tick_ms: u64,

    /// Seed for a reproducible starting board
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start from a named pattern instead of random cells
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Symbol drawn for alive cells
    #[arg(short = 'a', long, default_value_t = '█')]
    pub glyph: char,

    /// Stop after this many generations; runs until interrupted if omitted
    #[arg(short = 'n', long)]
    pub generations: Option<u64>,
}

impl Args {
    pub fn config(&self) -> Result<Config, ConfigError> {
        let config = Config {
            width: self.width,
            height: self.height,
            tick: Duration::from_millis(self.tick_ms),
            seeding: Seeding::from_options(self.density, self.seed, self.pattern.as_deref())?,
        };
        config.validate()?;
        Ok(config)
    }
}
