// error.rs - Error types for grid construction and run configuration

use std::fmt;

/// Rejected input when building a [`Grid`](crate::Grid) from explicit rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row with no cells.
    Empty,
    /// A row whose length differs from the first row.
    Ragged { row: usize, len: usize, expected: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::Ragged { row, len, expected } => {
                write!(f, "row {row} has length {len}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Misconfiguration detected before a run starts.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    /// Density must be a probability in `[0, 1]`.
    Density(f64),
    ZeroTick,
    UnknownPattern(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "grid width must be at least 1"),
            Self::ZeroHeight => write!(f, "grid height must be at least 1"),
            Self::Density(d) => write!(f, "density {d} is outside [0, 1]"),
            Self::ZeroTick => write!(f, "tick interval must be non-zero"),
            Self::UnknownPattern(name) => write!(f, "unknown pattern {name:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_message_names_the_row() {
        let err = GridError::Ragged { row: 2, len: 4, expected: 5 };
        assert_eq!(err.to_string(), "row 2 has length 4, expected 5");
    }

    #[test]
    fn density_message_includes_value() {
        assert_eq!(
            ConfigError::Density(1.5).to_string(),
            "density 1.5 is outside [0, 1]"
        );
    }
}
