// main.rs - Window front end: the central panel is the canvas

mod args;
mod ui;

use anyhow::Context;
use clap::Parser;
use conway::driver::{self, DriverHandle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::{Args, CanvasStyle};

const INITIAL_SIZE: egui::Vec2 = egui::Vec2::new(800.0, 600.0);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let style = args.style()?;
    let config = args.config(INITIAL_SIZE).context("invalid configuration")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("conway-driver")
        .enable_time()
        .build()
        .context("failed to start the simulation runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(INITIAL_SIZE),
        ..Default::default()
    };

    info!(?config, "opening window");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let driver = driver::spawn(runtime.handle(), config, move || ctx.request_repaint());
            Box::new(GameOfLife {
                driver,
                style,
                dims: (config.width, config.height),
                _runtime: runtime,
            })
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to open window: {err}"))
}

/// Window-side simulation context.
///
/// Fields drop in order: the driver handle stops the tick task before the
/// runtime that hosts it shuts down.
pub struct GameOfLife {
    driver: DriverHandle,
    style: CanvasStyle,
    /// Board size last requested from the driver.
    dims: (usize, usize),
    _runtime: tokio::runtime::Runtime,
}
