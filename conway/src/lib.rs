//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! [`Grid`] holds one generation and computes the next one. [`Simulation`]
//! keeps the current generation for a front end, and [`driver`] runs the
//! tick loop as a tokio task for front ends that render from another
//! thread.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod sim;

pub use config::{Config, Seeding};
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use patterns::{Pattern, PATTERNS};
pub use sim::{Frame, Simulation};
