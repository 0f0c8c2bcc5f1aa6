// main.rs - Console front end: render, step, wait, until interrupted

mod args;
mod render;

use std::io;

use anyhow::Context;
use clap::Parser;
use conway::Simulation;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Args;
use render::ConsoleRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the animation on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config().context("invalid configuration")?;
    info!(?config, "starting console simulation");

    let mut sim = Simulation::from_config(&config);
    let mut renderer = ConsoleRenderer::new(io::stdout(), args.glyph).context("terminal unavailable")?;

    let mut ticker = time::interval(config.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        renderer.render(sim.grid()).context("failed to draw frame")?;
        if args.generations.is_some_and(|n| sim.generation() >= n) {
            break;
        }
        sim.step();

        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut interrupt => {
                info!(generation = sim.generation(), "interrupted");
                break;
            }
        }
    }

    Ok(())
}
