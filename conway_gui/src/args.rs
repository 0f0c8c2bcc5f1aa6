use std::time::Duration;

use clap::Parser;
use conway::config::DEFAULT_DENSITY;
use conway::{Config, ConfigError, Seeding};
use egui::{Color32, Vec2};

/// Conway's Game of Life filling a resizable window.
///
/// The board is as many cells as fit in the window; resizing the window
/// starts a new board.
#[derive(Parser, Debug)]
#[command(name = "conway-gui", version)]
pub struct Args {
    /// Edge length of one cell in logical pixels
    #[arg(short, long, default_value_t = 10.0)]
    pub cell_size: f32,

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

    /// Color of alive cells, `#rrggbb` or a color name
    #[arg(long, default_value = "lime", value_parser = parse_color)]
    pub alive_color: Color32,

    /// Background color
    #[arg(long, default_value = "black", value_parser = parse_color)]
    pub dead_color: Color32,
}

/// How cells are drawn.
#[derive(Debug, Clone, Copy)]
pub struct CanvasStyle {
    pub cell_size: f32,
    pub alive: Color32,
    pub dead: Color32,
}

impl Args {
    pub fn style(&self) -> anyhow::Result<CanvasStyle> {
        anyhow::ensure!(
            self.cell_size.is_finite() && self.cell_size >= 1.0,
            "cell size must be at least 1 pixel, got {}",
            self.cell_size
        );
        Ok(CanvasStyle {
            cell_size: self.cell_size,
            alive: self.alive_color,
            dead: self.dead_color,
        })
    }

    /// Configuration for a board filling a `viewport` sized canvas.
    pub fn config(&self, viewport: Vec2) -> Result<Config, ConfigError> {
        let (width, height) = grid_dims(viewport, self.cell_size);
        let config = Config {
            width,
            height,
            tick: Duration::from_millis(self.tick_ms),
            seeding: Seeding::from_options(self.density, self.seed, self.pattern.as_deref())?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Whole cells that fit in `viewport`, at least one in each direction.
pub fn grid_dims(viewport: Vec2, cell_size: f32) -> (usize, usize) {
    let cells = |px: f32| ((px / cell_size).floor().max(1.0)) as usize;
    (cells(viewport.x), cells(viewport.y))
}

pub fn parse_color(s: &str) -> Result<Color32, String> {
    let named = match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color32::BLACK),
        "white" => Some(Color32::WHITE),
        "lime" => Some(Color32::from_rgb(0, 255, 0)),
        "green" => Some(Color32::from_rgb(0, 128, 0)),
        "red" => Some(Color32::RED),
        "blue" => Some(Color32::BLUE),
        "yellow" => Some(Color32::YELLOW),
        "gray" | "grey" => Some(Color32::GRAY),
        _ => None,
    };
    if let Some(color) = named {
        return Ok(color);
    }

    let hex = s
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.is_ascii())
        .ok_or_else(|| format!("expected #rrggbb or a color name, got {s:?}"))?;
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid hex color {s:?}"))
    };
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["conway-gui"]);
        let style = args.style().unwrap();
        assert_eq!(style.cell_size, 10.0);
        assert_eq!(style.alive, Color32::from_rgb(0, 255, 0));
        assert_eq!(style.dead, Color32::BLACK);

        let config = args.config(Vec2::new(800.0, 600.0)).unwrap();
        assert_eq!((config.width, config.height), (80, 60));
        assert_eq!(config.tick, Duration::from_millis(100));
    }

    #[test]
    fn colors_by_name_and_hex() {
        assert_eq!(parse_color("Lime"), Ok(Color32::from_rgb(0, 255, 0)));
        assert_eq!(parse_color("#102030"), Ok(Color32::from_rgb(0x10, 0x20, 0x30)));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#zz0000").is_err());
        assert!(parse_color("chartreuse").is_err());
    }

    #[test]
    fn dims_round_down_and_never_reach_zero() {
        assert_eq!(grid_dims(Vec2::new(805.0, 599.0), 10.0), (80, 59));
        assert_eq!(grid_dims(Vec2::new(3.0, 0.0), 10.0), (1, 1));
    }

    #[test]
    fn tiny_cells_are_rejected() {
        let args = Args::parse_from(["conway-gui", "--cell-size", "0.5"]);
        assert!(args.style().is_err());
    }
}
